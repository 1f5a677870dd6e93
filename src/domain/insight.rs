// AI collaborator outputs. Text is opaque and only ever displayed.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiResponse {
    pub text: String,
    pub confidence: Option<f64>,
}

impl AiResponse {
    /// Wraps collaborator output. Empty or whitespace-only text means no insight.
    pub fn from_text(text: String, confidence: Option<f64>) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text,
            confidence: confidence.map(|c| c.clamp(0.0, 1.0)),
        })
    }

    /// Non-blank lines, used when the response is shown as a list.
    pub fn lines(&self) -> Vec<String> {
        self.text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.8 {
            Self::High
        } else if score > 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::High => "#4caf50",
            Self::Medium => "#ff9800",
            Self::Low => "#f44336",
        }
    }
}

/// Root-cause analysis over problematic towers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssueAnalysis {
    pub root_causes: String,
    pub recommendations: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    StrategicReport,
    RiskAssessment,
    ExecutiveSummary,
}

impl ReportKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "strategic" => Some(Self::StrategicReport),
            "risk" => Some(Self::RiskAssessment),
            "summary" => Some(Self::ExecutiveSummary),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::StrategicReport => "strategic",
            Self::RiskAssessment => "risk",
            Self::ExecutiveSummary => "summary",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::StrategicReport => "Strategic Intelligence Analysis",
            Self::RiskAssessment => "🎯 AI Risk Assessment & Recommendations",
            Self::ExecutiveSummary => "AI Executive Summary",
        }
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            Self::StrategicReport => {
                "AI is analyzing network data and market trends for strategic insights..."
            }
            Self::RiskAssessment => "Running predictive models on network infrastructure...",
            Self::ExecutiveSummary => "AI is summarizing network and customer metrics...",
        }
    }
}

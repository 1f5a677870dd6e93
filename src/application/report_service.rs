// Report service - On-demand AI reports built from the current KPIs
use crate::application::dashboard_service::DashboardSnapshot;
use crate::application::insight_provider::InsightProvider;
use crate::application::warehouse::Warehouse;
use crate::domain::insight::{AiResponse, IssueAnalysis, ReportKind};
use crate::domain::kpi::KpiSet;
use crate::domain::metrics::TowerIssue;
use std::sync::Arc;

pub const COMPLETION_UNAVAILABLE: &str =
    "AI completion service is temporarily unavailable. Please check back shortly for AI-powered insights.";

const STRATEGIC_CONFIDENCE: f64 = 0.92;

const STRATEGIC_INSTRUCTIONS: &str = "You are the chief strategy advisor to a telecommunications executive team. \
Write a STRATEGIC NETWORK INTELLIGENCE REPORT with the sections EXECUTIVE SUMMARY, MARKET POSITION, \
INVESTMENT PRIORITIES, RISK MITIGATION and COMPETITIVE ADVANTAGE. Ground every statement in the metrics below \
and keep it concise and executive-level.";

const RISK_INSTRUCTIONS: &str = "You are a network reliability analyst. Based on the metrics below, list up to 5 \
prioritized risk recommendations, one per line, each starting with a severity marker \
(🔴 critical, 🟡 warning, 🟢 healthy, 🔵 investment, ⚫ compliance) followed by the affected area, \
the risk and the recommended action. Do not add any other text.";

#[derive(Clone)]
pub struct ReportService {
    warehouse: Arc<dyn Warehouse>,
    insights: Arc<dyn InsightProvider>,
    problem_towers_sql: String,
}

impl ReportService {
    pub fn new(
        warehouse: Arc<dyn Warehouse>,
        insights: Arc<dyn InsightProvider>,
        problem_towers_sql: String,
    ) -> Self {
        Self {
            warehouse,
            insights,
            problem_towers_sql,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.insights.is_degraded()
    }

    /// Generate a report. `None` means the collaborator had nothing to say.
    pub async fn generate(
        &self,
        kind: ReportKind,
        snapshot: &DashboardSnapshot,
    ) -> Option<AiResponse> {
        tracing::info!("Generating {} report", kind.slug());

        let text = match kind {
            ReportKind::ExecutiveSummary => {
                self.insights
                    .generate_executive_summary(&snapshot.network, &snapshot.customer)
                    .await
            }
            ReportKind::StrategicReport | ReportKind::RiskAssessment => {
                let prompt = report_prompt(kind, snapshot);
                match self.insights.complete(&prompt).await {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!("{} report failed: {:#}", kind.slug(), e);
                        return AiResponse::from_text(COMPLETION_UNAVAILABLE.to_string(), None);
                    }
                }
            }
        };

        let confidence = match kind {
            ReportKind::StrategicReport if !self.is_degraded() => Some(STRATEGIC_CONFIDENCE),
            _ => None,
        };
        AiResponse::from_text(text, confidence)
    }

    /// Load the problematic towers and ask for root causes and recommendations.
    pub async fn analyze_network_issues(&self) -> IssueAnalysis {
        let issues: Vec<TowerIssue> = match self.warehouse.query_rows(&self.problem_towers_sql).await
        {
            Ok(rows) => rows.iter().map(TowerIssue::from).collect(),
            Err(e) => {
                tracing::warn!("Problem tower query failed: {:#}", e);
                Vec::new()
            }
        };

        tracing::debug!("Analyzing {} problematic towers", issues.len());
        self.insights.analyze_network_issues(&issues).await
    }
}

fn kpi_context(kpis: &KpiSet) -> String {
    kpis.iter()
        .map(|k| format!("- {}: {} (trend {:+.1}%)", k.name, k.value, k.trend))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fixed instruction template followed by the KPI context.
pub fn report_prompt(kind: ReportKind, snapshot: &DashboardSnapshot) -> String {
    let instructions = match kind {
        ReportKind::StrategicReport => STRATEGIC_INSTRUCTIONS,
        ReportKind::RiskAssessment => RISK_INSTRUCTIONS,
        ReportKind::ExecutiveSummary => "Summarize the network and customer metrics below.",
    };

    format!(
        "{}\n\nCurrent KPIs:\n{}\n\nCritical incidents: {}\nCritical support tickets: {}",
        instructions,
        kpi_context(&snapshot.kpis),
        snapshot.network.critical_issues_or_zero(),
        snapshot.customer.critical_tickets_or_zero(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::insight_provider::{
        CortexInsights, DEGRADED_COMPLETION, DEGRADED_ROOT_CAUSES, DegradedInsights,
    };
    use crate::application::warehouse::Row;
    use crate::application::warehouse::testing::FakeWarehouse;
    use crate::domain::kpi::derive_kpis;
    use crate::domain::metrics::{RawCustomerMetrics, RawNetworkMetrics};

    fn snapshot() -> DashboardSnapshot {
        let network = RawNetworkMetrics {
            total_towers: Some(1000),
            avg_success_rate: Some(0.95),
            critical_issues: Some(3),
            premium_towers: Some(950),
            ..Default::default()
        };
        let customer = RawCustomerMetrics {
            critical_tickets: Some(7),
            ..Default::default()
        };
        let kpis = derive_kpis(Some(&network), Some(&customer)).unwrap();
        DashboardSnapshot {
            network,
            customer,
            kpis,
            summary: String::new(),
        }
    }

    fn cortex_service(warehouse: Arc<FakeWarehouse>) -> ReportService {
        let insights = Arc::new(CortexInsights::new(warehouse.clone(), "m".to_string()));
        ReportService::new(warehouse, insights, "SELECT * FROM PROBLEM_TOWERS".to_string())
    }

    #[test]
    fn test_prompt_includes_kpis_in_order() {
        let prompt = report_prompt(ReportKind::StrategicReport, &snapshot());

        assert!(prompt.starts_with("You are the chief strategy advisor"));
        assert!(prompt.contains("- Network Uptime: 95.0% (trend +2.1%)"));
        assert!(prompt.contains("- Risk Incidents: 3 (trend -8.3%)"));
        assert!(prompt.contains("Critical support tickets: 7"));
        let uptime = prompt.find("Network Uptime").unwrap();
        let premium = prompt.find("Premium Performance").unwrap();
        assert!(uptime < premium);
    }

    #[tokio::test]
    async fn test_strategic_report_passes_text_through() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond(
            "AI_COMPLETE",
            Ok(vec![Row::new().with("COMPLETION", "**EXECUTIVE SUMMARY** all good")]),
        );

        let response = cortex_service(warehouse)
            .generate(ReportKind::StrategicReport, &snapshot())
            .await
            .unwrap();

        assert_eq!(response.text, "**EXECUTIVE SUMMARY** all good");
        assert_eq!(response.confidence, Some(0.92));
    }

    #[tokio::test]
    async fn test_empty_completion_is_no_insight() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond("AI_COMPLETE", Ok(vec![Row::new().with("COMPLETION", "   ")]));

        let response = cortex_service(warehouse)
            .generate(ReportKind::RiskAssessment, &snapshot())
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_collaborator_failure_becomes_placeholder() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond("AI_COMPLETE", Err("quota exceeded"));

        let response = cortex_service(warehouse)
            .generate(ReportKind::RiskAssessment, &snapshot())
            .await
            .unwrap();

        assert_eq!(response.text, COMPLETION_UNAVAILABLE);
        assert!(response.text.contains("unavailable"));
        assert_eq!(response.confidence, None);
    }

    #[tokio::test]
    async fn test_degraded_provider_has_no_confidence() {
        let warehouse = Arc::new(FakeWarehouse::new());
        let service = ReportService::new(warehouse, Arc::new(DegradedInsights), String::new());

        let response = service
            .generate(ReportKind::StrategicReport, &snapshot())
            .await
            .unwrap();

        assert!(service.is_degraded());
        assert_eq!(response.text, DEGRADED_COMPLETION);
        assert_eq!(response.confidence, None);
    }

    #[tokio::test]
    async fn test_executive_summary_uses_summary_generation() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond(
            "senior telco network analyst",
            Ok(vec![Row::new().with("COMPLETION", "Network health is strong.")]),
        );

        let response = cortex_service(warehouse)
            .generate(ReportKind::ExecutiveSummary, &snapshot())
            .await
            .unwrap();
        assert_eq!(response.text, "Network health is strong.");
    }

    #[tokio::test]
    async fn test_analyze_network_issues_feeds_tower_rows() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond(
            "PROBLEM_TOWERS",
            Ok(vec![Row::new().with("CELL_ID", "2847").with("PM_ERAB_REL_ABNORMAL_ENB", "91")]),
        );
        warehouse.respond(
            "AI_COMPLETE",
            Ok(vec![Row::new().with("COMPLETION", "insight")]),
        );

        let analysis = cortex_service(warehouse.clone()).analyze_network_issues().await;

        assert_eq!(analysis.root_causes, "insight");
        assert_eq!(analysis.risk_assessment.as_deref(), Some("insight"));
        assert!(warehouse.executed()[1].contains("Cell Tower 2847 issues"));
    }

    #[tokio::test]
    async fn test_analyze_with_degraded_provider() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond("PROBLEM_TOWERS", Err("no warehouse"));
        let service = ReportService::new(
            warehouse,
            Arc::new(DegradedInsights),
            "SELECT * FROM PROBLEM_TOWERS".to_string(),
        );

        let analysis = service.analyze_network_issues().await;
        assert_eq!(analysis.root_causes, DEGRADED_ROOT_CAUSES);
    }
}

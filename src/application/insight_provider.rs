// AI collaborator seam: full provider backed by the warehouse, degraded stand-in
use crate::application::warehouse::Warehouse;
use crate::domain::insight::IssueAnalysis;
use crate::domain::metrics::{RawCustomerMetrics, RawNetworkMetrics, TowerIssue};
use crate::infrastructure::sql_templates::sql_string_literal;
use async_trait::async_trait;
use std::sync::Arc;

pub const DEGRADED_SUMMARY: &str = "🤖 AI analysis functionality is being updated. Please refresh the page in a few minutes to access the full AI capabilities!";
pub const DEGRADED_ROOT_CAUSES: &str = "AI root cause analysis temporarily unavailable";
pub const DEGRADED_RECOMMENDATIONS: &str = "Please check back shortly for AI-powered recommendations";
pub const DEGRADED_COMPLETION: &str =
    "AI completion service is being updated. Full AI features will be available shortly!";
pub const SUMMARY_FAILED: &str = "Unable to generate executive summary at this time.";

const RISK_CONTEXT_CHARS: usize = 500;

/// Token cap for completions.
pub const DEFAULT_MAX_TOKENS: u32 = 500;
/// The executive summary gets a larger budget.
pub const SUMMARY_MAX_TOKENS: u32 = 800;

#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// True for the stand-in selected when the AI service is unavailable
    fn is_degraded(&self) -> bool;

    /// Free-text completion for a prompt
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;

    /// Executive summary over both aggregates. Never fails.
    async fn generate_executive_summary(
        &self,
        network: &RawNetworkMetrics,
        customer: &RawCustomerMetrics,
    ) -> String;

    /// Root causes and recommendations for problematic towers. Never fails.
    async fn analyze_network_issues(&self, issues: &[TowerIssue]) -> IssueAnalysis;
}

/// Completions through the warehouse's AI_COMPLETE function.
pub struct CortexInsights {
    warehouse: Arc<dyn Warehouse>,
    model: String,
}

impl CortexInsights {
    pub fn new(warehouse: Arc<dyn Warehouse>, model: String) -> Self {
        Self { warehouse, model }
    }

    /// Issue a trivial completion to check the service answers.
    pub async fn check_available(&self) -> anyhow::Result<()> {
        let reply = self.complete("Reply with the single word OK.").await?;
        if reply.trim().is_empty() {
            anyhow::bail!("AI availability check returned no text");
        }
        Ok(())
    }

    async fn complete_capped(&self, prompt: &str, max_tokens: u32) -> anyhow::Result<String> {
        let sql = format!(
            "SELECT SNOWFLAKE.CORTEX.AI_COMPLETE({}, {}, {{'max_tokens': {}}}) AS COMPLETION",
            sql_string_literal(&self.model),
            sql_string_literal(prompt),
            max_tokens,
        );
        let row = self.warehouse.query_row(&sql).await?;
        Ok(row.and_then(|r| r.str("COMPLETION")).unwrap_or_default())
    }

    async fn complete_or_empty(&self, prompt: &str, purpose: &str) -> String {
        match self.complete(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("AI completion for {} failed: {:#}", purpose, e);
                String::new()
            }
        }
    }
}

fn summary_prompt(network: &RawNetworkMetrics, customer: &RawCustomerMetrics) -> String {
    format!(
        "As a senior telco network analyst, provide an executive summary based on this data:\n\n\
         Network Performance Summary:\n\
         - Total Cell Towers Analyzed: {}\n\
         - Average Connection Success Rate: {:.2}%\n\
         - Critical Issues Identified: {}\n\n\
         Customer Support Summary:\n\
         - Total Tickets: {}\n\
         - Average Sentiment Score: {:.2}\n\
         - Critical Tickets: {}\n\n\
         Include:\n\
         1. Overall network health status\n\
         2. Key performance indicators\n\
         3. Critical issues requiring immediate attention\n\
         4. Customer satisfaction insights\n\
         5. Strategic recommendations for the next quarter\n\n\
         Keep it concise, executive-level, and actionable.",
        network.total_towers_or_zero(),
        network.avg_success_rate_or_zero() * 100.0,
        network.critical_issues_or_zero(),
        customer.total_tickets_or_zero(),
        customer.avg_sentiment_or_zero(),
        customer.critical_tickets_or_zero(),
    )
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[async_trait]
impl InsightProvider for CortexInsights {
    fn is_degraded(&self) -> bool {
        false
    }

    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        self.complete_capped(prompt, DEFAULT_MAX_TOKENS).await
    }

    async fn generate_executive_summary(
        &self,
        network: &RawNetworkMetrics,
        customer: &RawCustomerMetrics,
    ) -> String {
        match self
            .complete_capped(&summary_prompt(network, customer), SUMMARY_MAX_TOKENS)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Executive summary generation failed: {:#}", e);
                SUMMARY_FAILED.to_string()
            }
        }
    }

    async fn analyze_network_issues(&self, issues: &[TowerIssue]) -> IssueAnalysis {
        if issues.is_empty() {
            return IssueAnalysis::default();
        }

        let described: Vec<String> = issues.iter().map(TowerIssue::describe).collect();
        let context = described.join("\n\n");

        let root_causes = self
            .complete_or_empty(
                &format!(
                    "Identify the top 3 root causes of network failures based on the technical metrics provided:\n\n{}",
                    context
                ),
                "root causes",
            )
            .await;
        let recommendations = self
            .complete_or_empty(
                &format!(
                    "Provide 5 specific technical recommendations to resolve these network issues, prioritized by impact:\n\n{}",
                    context
                ),
                "recommendations",
            )
            .await;
        let risk_assessment = self
            .complete_or_empty(
                &format!(
                    "Based on these network issues, provide a risk assessment for customer impact and business continuity: {}...",
                    truncate_chars(&described[0], RISK_CONTEXT_CHARS)
                ),
                "risk assessment",
            )
            .await;

        IssueAnalysis {
            root_causes,
            recommendations,
            risk_assessment: Some(risk_assessment).filter(|r| !r.trim().is_empty()),
        }
    }
}

/// Fixed "being updated" answers used when the AI service is not reachable.
#[derive(Debug, Default, Clone, Copy)]
pub struct DegradedInsights;

#[async_trait]
impl InsightProvider for DegradedInsights {
    fn is_degraded(&self) -> bool {
        true
    }

    async fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(DEGRADED_COMPLETION.to_string())
    }

    async fn generate_executive_summary(
        &self,
        _network: &RawNetworkMetrics,
        _customer: &RawCustomerMetrics,
    ) -> String {
        DEGRADED_SUMMARY.to_string()
    }

    async fn analyze_network_issues(&self, _issues: &[TowerIssue]) -> IssueAnalysis {
        IssueAnalysis {
            root_causes: DEGRADED_ROOT_CAUSES.to_string(),
            recommendations: DEGRADED_RECOMMENDATIONS.to_string(),
            risk_assessment: None,
        }
    }
}

/// Pick the provider once at startup.
pub async fn select_insight_provider(
    enabled: bool,
    model: &str,
    warehouse: Arc<dyn Warehouse>,
) -> Arc<dyn InsightProvider> {
    if !enabled {
        tracing::info!("AI insights disabled by configuration, using degraded provider");
        return Arc::new(DegradedInsights);
    }

    let cortex = CortexInsights::new(warehouse, model.to_string());
    match cortex.check_available().await {
        Ok(()) => {
            tracing::info!("AI insights enabled with model {}", model);
            Arc::new(cortex)
        }
        Err(e) => {
            tracing::warn!("AI service unavailable, using degraded provider: {:#}", e);
            Arc::new(DegradedInsights)
        }
    }
}

// Raw aggregate rows returned by the warehouse
use serde::Serialize;

/// Towers with more abnormal E-RAB releases than this count as risk incidents.
pub const ABNORMAL_RELEASE_THRESHOLD: i64 = 50;

/// Towers above this connection-success ratio count as premium.
pub const PREMIUM_SUCCESS_RATIO: f64 = 0.95;

/// Tickets below this sentiment score count as critical.
pub const NEGATIVE_SENTIMENT_THRESHOLD: f64 = -0.5;

/// Tickets above this sentiment score count as satisfied.
pub const POSITIVE_SENTIMENT_THRESHOLD: f64 = 0.5;

/// Network health aggregate over the reporting window.
///
/// Every field is nullable at the source. Use the `*_or_zero` accessors
/// before doing arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawNetworkMetrics {
    pub total_towers: Option<i64>,
    pub avg_success_rate: Option<f64>,
    pub critical_issues: Option<i64>,
    pub avg_dl_utilization: Option<f64>,
    pub total_throughput: Option<f64>,
    pub premium_towers: Option<i64>,
}

impl RawNetworkMetrics {
    pub fn total_towers_or_zero(&self) -> i64 {
        self.total_towers.unwrap_or(0)
    }

    pub fn avg_success_rate_or_zero(&self) -> f64 {
        self.avg_success_rate.unwrap_or(0.0)
    }

    pub fn critical_issues_or_zero(&self) -> i64 {
        self.critical_issues.unwrap_or(0)
    }

    pub fn premium_towers_or_zero(&self) -> i64 {
        self.premium_towers.unwrap_or(0)
    }
}

/// Support ticket sentiment aggregate over the reporting window.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawCustomerMetrics {
    pub total_tickets: Option<i64>,
    pub avg_sentiment: Option<f64>,
    pub critical_tickets: Option<i64>,
    pub unique_customers: Option<i64>,
    pub satisfied_customers: Option<i64>,
}

impl RawCustomerMetrics {
    pub fn total_tickets_or_zero(&self) -> i64 {
        self.total_tickets.unwrap_or(0)
    }

    pub fn avg_sentiment_or_zero(&self) -> f64 {
        self.avg_sentiment.unwrap_or(0.0)
    }

    pub fn critical_tickets_or_zero(&self) -> i64 {
        self.critical_tickets.unwrap_or(0)
    }
}

/// One tower from the problematic-towers listing, fed to issue analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TowerIssue {
    pub cell_id: Option<String>,
    pub location: Option<String>,
    pub connection_successes: Option<i64>,
    pub connection_attempts: Option<i64>,
    pub abnormal_releases: Option<i64>,
    pub failure_cause: Option<String>,
}

impl TowerIssue {
    /// Plain-text description handed to the AI collaborator.
    pub fn describe(&self) -> String {
        format!(
            "Cell Tower {} issues:\n- Location: {}\n- Connection Success: {}/{}\n- Abnormal Releases: {}\n- Failure Codes: {}",
            self.cell_id.as_deref().unwrap_or("Unknown"),
            self.location.as_deref().unwrap_or("Unknown"),
            self.connection_successes.unwrap_or(0),
            self.connection_attempts.unwrap_or(1),
            self.abnormal_releases.unwrap_or(0),
            self.failure_cause.as_deref().unwrap_or("Unknown"),
        )
    }
}

// Failures the dashboard reasons about
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// A query returned no rows, failed, or the warehouse could not be reached.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("unknown report kind: {0}")]
    UnknownReport(String),
}

// Warehouse trait for aggregate and AI queries
use crate::domain::metrics::{RawCustomerMetrics, RawNetworkMetrics, TowerIssue};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// A single result row keyed by column name.
///
/// Column names are matched case-insensitively. Cells may arrive as JSON
/// numbers or as strings (statement APIs encode every cell as text), and
/// both decode through the typed getters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: &str, value: Value) {
        self.columns.insert(column.to_ascii_uppercase(), value);
    }

    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.insert(column, value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(&column.to_ascii_uppercase())
    }

    pub fn f64(&self, column: &str) -> Option<f64> {
        match self.get(column)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    pub fn i64(&self, column: &str) -> Option<i64> {
        match self.get(column)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
            }
            _ => None,
        }
    }

    pub fn str(&self, column: &str) -> Option<String> {
        match self.get(column)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl From<&Row> for RawNetworkMetrics {
    fn from(row: &Row) -> Self {
        Self {
            total_towers: row.i64("TOTAL_TOWERS"),
            avg_success_rate: row.f64("AVG_SUCCESS_RATE"),
            critical_issues: row.i64("CRITICAL_ISSUES"),
            avg_dl_utilization: row.f64("AVG_DL_UTILIZATION"),
            total_throughput: row.f64("TOTAL_THROUGHPUT"),
            premium_towers: row.i64("PREMIUM_TOWERS"),
        }
    }
}

impl From<&Row> for RawCustomerMetrics {
    fn from(row: &Row) -> Self {
        Self {
            total_tickets: row.i64("TOTAL_TICKETS"),
            avg_sentiment: row.f64("AVG_SENTIMENT"),
            critical_tickets: row.i64("CRITICAL_TICKETS"),
            unique_customers: row.i64("UNIQUE_CUSTOMERS"),
            satisfied_customers: row.i64("SATISFIED_CUSTOMERS"),
        }
    }
}

impl From<&Row> for TowerIssue {
    fn from(row: &Row) -> Self {
        Self {
            cell_id: row.str("CELL_ID"),
            location: row.str("BID_DESCRIPTION"),
            connection_successes: row.i64("PM_RRC_CONN_ESTAB_SUCC"),
            connection_attempts: row.i64("PM_RRC_CONN_ESTAB_ATT"),
            abnormal_releases: row.i64("PM_ERAB_REL_ABNORMAL_ENB"),
            failure_cause: row.str("CAUSE_CODE_SHORT_DESCRIPTION"),
        }
    }
}

#[async_trait]
pub trait Warehouse: Send + Sync {
    /// Run a statement and return every row
    async fn query_rows(&self, sql: &str) -> anyhow::Result<Vec<Row>>;

    /// Run a statement and return the first row, if any
    async fn query_row(&self, sql: &str) -> anyhow::Result<Option<Row>> {
        Ok(self.query_rows(sql).await?.into_iter().next())
    }
}

// Fixed SQL statements issued against the warehouse
use crate::domain::metrics::{
    ABNORMAL_RELEASE_THRESHOLD, NEGATIVE_SENTIMENT_THRESHOLD, POSITIVE_SENTIMENT_THRESHOLD,
    PREMIUM_SUCCESS_RATIO,
};
use crate::infrastructure::config::prepare_query;
use std::collections::HashMap;

pub const NETWORK_HEALTH_SQL: &str = r#"
SELECT
    COUNT(DISTINCT CELL_ID) AS TOTAL_TOWERS,
    AVG(NVL(PM_RRC_CONN_ESTAB_SUCC, 0) / NULLIF(PM_RRC_CONN_ESTAB_ATT, 0)) AS AVG_SUCCESS_RATE,
    COUNT(CASE WHEN PM_ERAB_REL_ABNORMAL_ENB > ${abnormal_threshold} THEN 1 END) AS CRITICAL_ISSUES,
    AVG(NVL(PM_PRB_UTIL_DL, 0)) AS AVG_DL_UTILIZATION,
    SUM(NVL(PM_PDCP_UL_THPT, 0) + NVL(PM_PDCP_DL_THPT, 0)) AS TOTAL_THROUGHPUT,
    COUNT(CASE WHEN PM_RRC_CONN_ESTAB_SUCC / NULLIF(PM_RRC_CONN_ESTAB_ATT, 0) > ${premium_ratio} THEN 1 END) AS PREMIUM_TOWERS
FROM ${database}.${schema}.CELL_TOWER
WHERE EVENT_DATE >= DATEADD(day, -${days}, CURRENT_DATE())
"#;

pub const CUSTOMER_SENTIMENT_SQL: &str = r#"
SELECT
    COUNT(*) AS TOTAL_TICKETS,
    AVG(SENTIMENT_SCORE) AS AVG_SENTIMENT,
    COUNT(CASE WHEN SENTIMENT_SCORE < ${negative_sentiment} THEN 1 END) AS CRITICAL_TICKETS,
    COUNT(DISTINCT CUSTOMER_NAME) AS UNIQUE_CUSTOMERS,
    COUNT(CASE WHEN SENTIMENT_SCORE > ${positive_sentiment} THEN 1 END) AS SATISFIED_CUSTOMERS
FROM ${database}.${schema}.SUPPORT_TICKETS
WHERE OPEN_DATE >= DATEADD(day, -${days}, CURRENT_DATE())
"#;

pub const PROBLEM_TOWERS_SQL: &str = r#"
SELECT
    CELL_ID,
    BID_DESCRIPTION,
    PM_RRC_CONN_ESTAB_SUCC,
    PM_RRC_CONN_ESTAB_ATT,
    PM_ERAB_REL_ABNORMAL_ENB,
    CAUSE_CODE_SHORT_DESCRIPTION
FROM ${database}.${schema}.CELL_TOWER
WHERE EVENT_DATE >= DATEADD(day, -${days}, CURRENT_DATE())
  AND PM_ERAB_REL_ABNORMAL_ENB > ${abnormal_threshold}
ORDER BY PM_ERAB_REL_ABNORMAL_ENB DESC
LIMIT 10
"#;

/// Statements with database, schema, window and thresholds already substituted.
#[derive(Debug, Clone)]
pub struct DashboardQueries {
    pub network_health: String,
    pub customer_sentiment: String,
    pub problem_towers: String,
}

impl DashboardQueries {
    pub fn new(database: &str, schema: &str, window_days: u32) -> Self {
        let mut vars = HashMap::new();
        vars.insert("database".to_string(), database.to_string());
        vars.insert("schema".to_string(), schema.to_string());
        vars.insert("days".to_string(), window_days.to_string());
        vars.insert(
            "abnormal_threshold".to_string(),
            ABNORMAL_RELEASE_THRESHOLD.to_string(),
        );
        vars.insert("premium_ratio".to_string(), PREMIUM_SUCCESS_RATIO.to_string());
        vars.insert(
            "negative_sentiment".to_string(),
            NEGATIVE_SENTIMENT_THRESHOLD.to_string(),
        );
        vars.insert(
            "positive_sentiment".to_string(),
            POSITIVE_SENTIMENT_THRESHOLD.to_string(),
        );

        Self {
            network_health: prepare_query(NETWORK_HEALTH_SQL, &vars),
            customer_sentiment: prepare_query(CUSTOMER_SENTIMENT_SQL, &vars),
            problem_towers: prepare_query(PROBLEM_TOWERS_SQL, &vars),
        }
    }
}

/// Quote a value as a SQL string literal.
///
/// Backslashes are escape characters inside quoted literals, so they are
/// doubled before quotes are.
pub fn sql_string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "''"))
}

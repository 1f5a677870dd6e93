// Warehouse client for an HTTP SQL statement API
use crate::application::warehouse::{Row, Warehouse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Connection to the warehouse, built once at startup and shared.
#[derive(Debug, Clone)]
pub struct SqlApiWarehouse {
    client: reqwest::Client,
    host: String,
    token: String,
    database: String,
    schema: String,
    warehouse: String,
    role: Option<String>,
    timeout_secs: u64,
}

#[derive(Debug, Serialize)]
struct StatementRequest<'a> {
    statement: &'a str,
    timeout: u64,
    database: &'a str,
    schema: &'a str,
    warehouse: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatementResponse {
    #[serde(default)]
    result_set_meta_data: Option<ResultSetMetaData>,
    #[serde(default)]
    data: Vec<Vec<serde_json::Value>>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultSetMetaData {
    #[serde(default)]
    row_type: Vec<ColumnType>,
}

#[derive(Debug, Deserialize)]
struct ColumnType {
    name: String,
}

impl SqlApiWarehouse {
    pub fn new(
        host: String,
        token: String,
        database: String,
        schema: String,
        warehouse: String,
        role: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        // Leave headroom over the server-side statement timeout.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs + 10))
            .build()
            .context("Failed to build warehouse HTTP client")?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
            token,
            database,
            schema,
            warehouse,
            role,
            timeout_secs,
        })
    }

    fn statements_url(&self) -> String {
        format!("{}/api/v2/statements", self.host)
    }

    async fn execute_statement(&self, sql: &str) -> Result<StatementResponse> {
        let request = StatementRequest {
            statement: sql,
            timeout: self.timeout_secs,
            database: &self.database,
            schema: &self.schema,
            warehouse: &self.warehouse,
            role: self.role.as_deref(),
        };

        let response = self
            .client
            .post(self.statements_url())
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send statement to warehouse")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Warehouse statement failed with status {}: {}", status, body);
        }

        response
            .json::<StatementResponse>()
            .await
            .context("Failed to parse warehouse response")
    }
}

fn rows_from_response(response: StatementResponse) -> Result<Vec<Row>> {
    let columns: Vec<String> = match response.result_set_meta_data {
        Some(meta) => meta.row_type.into_iter().map(|c| c.name).collect(),
        None => {
            // Asynchronous execution or an error envelope; neither carries rows.
            anyhow::bail!(
                "Warehouse returned no result set: {}",
                response.message.unwrap_or_default()
            );
        }
    };

    Ok(response
        .data
        .into_iter()
        .map(|values| {
            let mut row = Row::new();
            for (column, value) in columns.iter().zip(values) {
                row.insert(column, value);
            }
            row
        })
        .collect())
}

#[async_trait]
impl Warehouse for SqlApiWarehouse {
    async fn query_rows(&self, sql: &str) -> Result<Vec<Row>> {
        let started = Instant::now();
        let response = self.execute_statement(sql).await?;
        let rows = rows_from_response(response)?;

        tracing::debug!(
            "Warehouse statement returned {} rows in {:?}",
            rows.len(),
            started.elapsed()
        );
        Ok(rows)
    }
}

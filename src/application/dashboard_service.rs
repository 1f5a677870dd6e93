// Dashboard service - Use case for loading executive KPIs
use crate::application::metrics_cache::TimedCache;
use crate::application::warehouse::{Row, Warehouse};
use crate::domain::kpi::{KpiSet, derive_kpis, executive_summary};
use crate::domain::metrics::{RawCustomerMetrics, RawNetworkMetrics};
use crate::error::DashboardError;
use crate::infrastructure::sql_templates::DashboardQueries;
use std::sync::Arc;
use std::time::Duration;

/// The two aggregate rows, cached together.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatePair {
    pub network: RawNetworkMetrics,
    pub customer: RawCustomerMetrics,
}

/// Everything the live dashboard needs, derived fresh on every load.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub network: RawNetworkMetrics,
    pub customer: RawCustomerMetrics,
    pub kpis: KpiSet,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardData {
    Available(DashboardSnapshot),
    Unavailable { reason: String },
}

impl DashboardData {
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            Self::Available(snapshot) => Some(snapshot),
            Self::Unavailable { .. } => None,
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    warehouse: Arc<dyn Warehouse>,
    queries: DashboardQueries,
    cache: Arc<TimedCache<AggregatePair>>,
}

impl DashboardService {
    pub fn new(warehouse: Arc<dyn Warehouse>, queries: DashboardQueries, ttl: Duration) -> Self {
        Self {
            warehouse,
            queries,
            cache: Arc::new(TimedCache::new(ttl)),
        }
    }

    /// Load the dashboard. Failures surface as `Unavailable`, never as errors.
    pub async fn load(&self) -> DashboardData {
        let pair = match self
            .cache
            .get_or_try_load(|| self.fetch_aggregates())
            .await
        {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!("Executive dashboard data unavailable: {}", e);
                return DashboardData::Unavailable {
                    reason: e.to_string(),
                };
            }
        };

        match derive_kpis(Some(&pair.network), Some(&pair.customer)) {
            Some(kpis) => {
                let summary = executive_summary(&pair.network, &kpis);
                DashboardData::Available(DashboardSnapshot {
                    network: pair.network,
                    customer: pair.customer,
                    kpis,
                    summary,
                })
            }
            None => DashboardData::Unavailable {
                reason: "aggregates incomplete".to_string(),
            },
        }
    }

    async fn fetch_aggregates(&self) -> Result<AggregatePair, DashboardError> {
        let network = self
            .fetch_row(&self.queries.network_health, "network health")
            .await?;
        let customer = self
            .fetch_row(&self.queries.customer_sentiment, "customer sentiment")
            .await?;

        Ok(AggregatePair {
            network: RawNetworkMetrics::from(&network),
            customer: RawCustomerMetrics::from(&customer),
        })
    }

    async fn fetch_row(&self, sql: &str, label: &str) -> Result<Row, DashboardError> {
        tracing::debug!("Executing {} query", label);
        self.warehouse
            .query_row(sql)
            .await
            .map_err(|e| {
                DashboardError::SourceUnavailable(format!("{} query failed: {:#}", label, e))
            })?
            .ok_or_else(|| {
                DashboardError::SourceUnavailable(format!("{} query returned no rows", label))
            })
    }
}

#[cfg(test)]
pub mod testing {
    use crate::application::warehouse::Row;
    use serde_json::json;

    pub fn network_row() -> Row {
        Row::new()
            .with("TOTAL_TOWERS", "1000")
            .with("AVG_SUCCESS_RATE", "0.95")
            .with("CRITICAL_ISSUES", "3")
            .with("AVG_DL_UTILIZATION", "41.2")
            .with("TOTAL_THROUGHPUT", "1500000")
            .with("PREMIUM_TOWERS", "950")
    }

    pub fn customer_row() -> Row {
        Row::new()
            .with("TOTAL_TICKETS", json!(420))
            .with("AVG_SENTIMENT", json!(0.0))
            .with("CRITICAL_TICKETS", json!(12))
            .with("UNIQUE_CUSTOMERS", json!(300))
            .with("SATISFIED_CUSTOMERS", json!(180))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{customer_row, network_row};
    use super::*;
    use crate::application::metrics_cache::DEFAULT_TTL;
    use crate::application::warehouse::testing::FakeWarehouse;
    use crate::domain::kpi::{ACTIVE_INFRASTRUCTURE, NETWORK_UPTIME, PREMIUM_PERFORMANCE};

    const NETWORK_MARKER: &str = "CELL_TOWER";
    const CUSTOMER_MARKER: &str = "SUPPORT_TICKETS";

    fn service(warehouse: Arc<FakeWarehouse>) -> DashboardService {
        DashboardService::new(warehouse, DashboardQueries::new("TELCO", "RAW", 7), DEFAULT_TTL)
    }

    #[tokio::test]
    async fn test_load_derives_kpis() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond(NETWORK_MARKER, Ok(vec![network_row()]));
        warehouse.respond(CUSTOMER_MARKER, Ok(vec![customer_row()]));

        let data = service(warehouse).load().await;
        let snapshot = data.snapshot().expect("dashboard should be available");

        assert_eq!(snapshot.kpis.value_of(NETWORK_UPTIME), "95.0%");
        assert_eq!(snapshot.kpis.value_of(ACTIVE_INFRASTRUCTURE), "1,000");
        assert_eq!(snapshot.kpis.value_of(PREMIUM_PERFORMANCE), "95%");
        assert!(snapshot.summary.contains("1,000 active cell towers"));
    }

    #[tokio::test]
    async fn test_null_columns_do_not_break_load() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond(NETWORK_MARKER, Ok(vec![Row::new()]));
        warehouse.respond(
            CUSTOMER_MARKER,
            Ok(vec![Row::new().with("AVG_SENTIMENT", serde_json::Value::Null)]),
        );

        let data = service(warehouse).load().await;
        let snapshot = data.snapshot().expect("nulls are zeros, not failures");
        assert_eq!(snapshot.kpis.value_of(NETWORK_UPTIME), "0.0%");
    }

    #[tokio::test]
    async fn test_empty_customer_result_is_unavailable() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond(NETWORK_MARKER, Ok(vec![network_row()]));
        warehouse.respond(CUSTOMER_MARKER, Ok(vec![]));

        match service(warehouse).load().await {
            DashboardData::Unavailable { reason } => {
                assert!(reason.contains("customer sentiment query returned no rows"))
            }
            other => panic!("expected unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_query_failure_is_unavailable() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond(NETWORK_MARKER, Err("session expired"));
        warehouse.respond(CUSTOMER_MARKER, Ok(vec![customer_row()]));

        let data = service(warehouse.clone()).load().await;
        assert!(data.snapshot().is_none());
        assert_eq!(warehouse.count_matching(CUSTOMER_MARKER), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cached_within_ttl_and_requeried_after() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond(NETWORK_MARKER, Ok(vec![network_row()]));
        warehouse.respond(CUSTOMER_MARKER, Ok(vec![customer_row()]));
        let service = service(warehouse.clone());

        let first = service.load().await;
        tokio::time::advance(Duration::from_secs(120)).await;
        let second = service.load().await;

        assert_eq!(first, second);
        assert_eq!(warehouse.count_matching(NETWORK_MARKER), 1);
        assert_eq!(warehouse.count_matching(CUSTOMER_MARKER), 1);

        tokio::time::advance(Duration::from_secs(181)).await;
        service.load().await;

        assert_eq!(warehouse.count_matching(NETWORK_MARKER), 2);
        assert_eq!(warehouse.count_matching(CUSTOMER_MARKER), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond(NETWORK_MARKER, Err("warehouse suspended"));
        warehouse.respond(NETWORK_MARKER, Ok(vec![network_row()]));
        warehouse.respond(CUSTOMER_MARKER, Ok(vec![customer_row()]));
        let service = service(warehouse.clone());

        assert!(service.load().await.snapshot().is_none());
        assert!(service.load().await.snapshot().is_some());
        assert_eq!(warehouse.count_matching(NETWORK_MARKER), 2);
    }
}

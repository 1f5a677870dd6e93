// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dashboard_page, health_check, kpis_json, network_issues_json, report_fragment,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/reports/:kind", get(report_fragment))
        .route("/api/kpis", get(kpis_json))
        .route("/api/network-issues", get(network_issues_json))
        .route("/healthz", get(health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::dashboard_service::testing::{customer_row, network_row};
    use crate::application::insight_provider::{
        DEGRADED_COMPLETION, DEGRADED_ROOT_CAUSES, DegradedInsights,
    };
    use crate::application::metrics_cache::DEFAULT_TTL;
    use crate::application::report_service::ReportService;
    use crate::application::warehouse::testing::FakeWarehouse;
    use crate::infrastructure::sql_templates::DashboardQueries;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn app(warehouse: Arc<FakeWarehouse>) -> Router {
        let queries = DashboardQueries::new("TELCO", "RAW", 7);
        let report_service = ReportService::new(
            warehouse.clone(),
            Arc::new(DegradedInsights),
            queries.problem_towers.clone(),
        );
        let dashboard_service = DashboardService::new(warehouse, queries, DEFAULT_TTL);
        build_router(Arc::new(AppState {
            dashboard_service,
            report_service,
        }))
    }

    fn healthy_warehouse() -> Arc<FakeWarehouse> {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond("SUPPORT_TICKETS", Ok(vec![customer_row()]));
        warehouse.respond("CELL_TOWER", Ok(vec![network_row()]));
        warehouse
    }

    fn broken_warehouse() -> Arc<FakeWarehouse> {
        let warehouse = Arc::new(FakeWarehouse::new());
        warehouse.respond("CELL_TOWER", Err("warehouse suspended"));
        warehouse.respond("SUPPORT_TICKETS", Err("warehouse suspended"));
        warehouse
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get(app(healthy_warehouse()), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_dashboard_renders_live_kpis() {
        let (status, body) = get(app(healthy_warehouse()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("Network Uptime"));
        assert!(body.contains("1,000"));
        assert!(body.contains("AI services updating"));
    }

    #[tokio::test]
    async fn test_dashboard_degrades_when_warehouse_fails() {
        let (status, body) = get(app(broken_warehouse()), "/?demo=peak_load").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("synchronization in progress"));
        assert!(body.contains("Scenario: Peak Load"));
        assert!(!body.contains("Network Uptime"));
    }

    #[tokio::test]
    async fn test_dashboard_with_report() {
        let (_, body) = get(app(healthy_warehouse()), "/?report=strategic").await;
        assert!(body.contains("Strategic Intelligence Analysis"));
        assert!(body.contains(DEGRADED_COMPLETION));

        let (status, body) = get(app(healthy_warehouse()), "/?report=forecast").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("unknown report kind: forecast"));
    }

    #[tokio::test]
    async fn test_report_fragment_routes() {
        let (status, body) = get(app(healthy_warehouse()), "/reports/risk").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("AI Risk Assessment"));

        let (status, body) = get(app(healthy_warehouse()), "/reports/forecast").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains(r#"<div class="info-box"#));
        assert!(body.contains("❌ unknown report kind: forecast"));

        let (status, body) = get(app(broken_warehouse()), "/reports/strategic").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("Reports need live network data"));
    }

    #[tokio::test]
    async fn test_kpis_json() {
        let (status, body) = get(app(healthy_warehouse()), "/api/kpis").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["available"], true);
        assert_eq!(json["kpis"].as_array().unwrap().len(), 6);
        assert_eq!(json["kpis"][0]["name"], "Network Uptime");
        assert_eq!(json["kpis"][0]["value"], "95.0%");

        let (_, body) = get(app(broken_warehouse()), "/api/kpis").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["available"], false);
        assert!(json["kpis"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_network_issues_json() {
        let (status, body) = get(app(healthy_warehouse()), "/api/network-issues").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["root_causes"], DEGRADED_ROOT_CAUSES);
    }

    #[tokio::test]
    async fn test_page_is_compressed_on_request() {
        let response = app(healthy_warehouse())
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ACCEPT_ENCODING, "gzip")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");
    }
}

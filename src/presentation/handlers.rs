// HTTP request handlers
use crate::application::dashboard_service::DashboardData;
use crate::domain::demo::DemoState;
use crate::domain::insight::{IssueAnalysis, ReportKind};
use crate::domain::kpi::KpiSet;
use crate::error::DashboardError;
use crate::presentation::app_state::AppState;
use crate::presentation::components::{AlertKind, info_box};
use crate::presentation::page::{DashboardPage, ReportView, render_report};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub report: Option<String>,
    pub demo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct KpiResponse {
    pub available: bool,
    pub kpis: KpiSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Executive dashboard, optionally with an on-demand report
pub async fn dashboard_page(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let demo = DemoState::from_request(query.demo.as_deref());
    let data = state.dashboard_service.load().await;

    let report = match query.report.as_deref().map(str::trim) {
        Some(slug) if !slug.is_empty() => Some(report_view(&state, slug, &data).await),
        _ => None,
    };

    let page = DashboardPage::build(demo, &data, report, state.report_service.is_degraded());
    Html(page.render())
}

/// A single report as an HTML fragment
pub async fn report_fragment(
    Path(kind): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    if ReportKind::parse(&kind).is_none() {
        let message = DashboardError::UnknownReport(kind).to_string();
        return (
            StatusCode::NOT_FOUND,
            Html(info_box(&message, AlertKind::Error)),
        )
            .into_response();
    }

    let data = state.dashboard_service.load().await;
    let view = report_view(&state, &kind, &data).await;
    let status = match view {
        ReportView::NeedsData => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };
    (status, Html(render_report(&view))).into_response()
}

pub async fn kpis_json(State(state): State<Arc<AppState>>) -> Json<KpiResponse> {
    let response = match state.dashboard_service.load().await {
        DashboardData::Available(snapshot) => KpiResponse {
            available: true,
            kpis: snapshot.kpis,
            reason: None,
        },
        DashboardData::Unavailable { reason } => KpiResponse {
            available: false,
            kpis: KpiSet::default(),
            reason: Some(reason),
        },
    };
    Json(response)
}

pub async fn network_issues_json(State(state): State<Arc<AppState>>) -> Json<IssueAnalysis> {
    Json(state.report_service.analyze_network_issues().await)
}

async fn report_view(state: &AppState, slug: &str, data: &DashboardData) -> ReportView {
    let Some(kind) = ReportKind::parse(slug) else {
        tracing::debug!("Ignoring unknown report request {:?}", slug);
        return ReportView::Invalid {
            message: DashboardError::UnknownReport(slug.to_string()).to_string(),
        };
    };

    match data.snapshot() {
        Some(snapshot) => ReportView::Insight {
            kind,
            response: state.report_service.generate(kind, snapshot).await,
        },
        None => ReportView::NeedsData,
    }
}

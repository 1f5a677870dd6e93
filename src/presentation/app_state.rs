// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::report_service::ReportService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub report_service: ReportService,
}

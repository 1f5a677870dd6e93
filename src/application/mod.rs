pub mod dashboard_service;
pub mod insight_provider;
pub mod metrics_cache;
pub mod report_service;
pub mod warehouse;

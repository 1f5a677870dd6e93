pub mod config;
pub mod sql_api_warehouse;
pub mod sql_templates;

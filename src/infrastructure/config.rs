use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub warehouse: WarehouseSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub ai: AiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WarehouseSettings {
    pub host: String,
    pub token: String,
    pub database: String,
    pub schema: String,
    pub warehouse: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheSettings {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AiSettings {
    #[serde(default = "default_ai_enabled")]
    pub enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            enabled: default_ai_enabled(),
            model: default_model(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_ttl_secs() -> u64 {
    300
}

fn default_window_days() -> u32 {
    7
}

fn default_ai_enabled() -> bool {
    true
}

fn default_model() -> String {
    "mistral-large".to_string()
}

/// Load `config/dashboard.toml`, overridden by `DASHBOARD__SECTION__KEY` variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace template variables in a query string
pub fn prepare_query(query: &str, vars: &HashMap<String, String>) -> String {
    let mut result = query.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

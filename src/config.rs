use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealbook_shared::Portion;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path of the JSON export of the catalog tables
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportConfig {
    /// Portion used when an order line or the CLI does not name one
    #[serde(default)]
    pub default_portion: Portion,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALBOOK__CATALOG__PATH, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with(
            config_path,
            Environment::with_prefix("MEALBOOK")
                .separator("__")
                .try_parsing(true),
        )
    }

    pub fn load_with(
        config_path: Option<String>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("catalog.path", "catalog.json")?
            .set_default("report.default_portion", Portion::default().as_ref())?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: missing file means defaults + environment only
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(environment);

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.path.trim().is_empty() {
            return Err("Catalog path must not be empty".to_string());
        }
        if self.observability.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        Ok(())
    }
}

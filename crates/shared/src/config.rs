//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Largest scale a `rust_decimal::Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report presentation configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Report presentation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Decimal places kept when rendering money amounts and percentages.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Number of minor units per major unit, as a power of ten (2 = cents).
    #[serde(default = "default_minor_unit_scale")]
    pub minor_unit_scale: u32,
    /// Project used when the caller does not name one.
    #[serde(default = "default_project")]
    pub default_project: String,
}

fn default_decimal_places() -> u32 {
    2
}

fn default_minor_unit_scale() -> u32 {
    2
}

fn default_project() -> String {
    "all".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            minor_unit_scale: default_minor_unit_scale(),
            default_project: default_project(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "leadcost=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `LEADCOST__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("LEADCOST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Checks that numeric settings fit in a decimal scale.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if a scale exceeds 28.
    pub fn validate(&self) -> AppResult<()> {
        if self.report.decimal_places > MAX_DECIMAL_SCALE {
            return Err(AppError::Configuration(format!(
                "report.decimal_places must be at most {MAX_DECIMAL_SCALE}, got {}",
                self.report.decimal_places
            )));
        }
        if self.report.minor_unit_scale > MAX_DECIMAL_SCALE {
            return Err(AppError::Configuration(format!(
                "report.minor_unit_scale must be at most {MAX_DECIMAL_SCALE}, got {}",
                self.report.minor_unit_scale
            )));
        }
        Ok(())
    }
}

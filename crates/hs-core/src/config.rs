//! Configuration types and loading
//!
//! Layering: built-in defaults, then an optional `homesolution.toml` (or any
//! format the `config` crate recognises under that base name), then `HS__`
//! prefixed environment variables such as `HS__LOGGING__FILTER=debug`.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Base name of the optional configuration file
pub const DEFAULT_CONFIG_NAME: &str = "homesolution";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "HS";

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Engine behaviour
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,hs_services=debug".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Description given to tasks registered without one
    pub default_task_description: String,

    /// Finalize a project (without an end date) as soon as its last open task finishes
    pub auto_finalize_on_last_task: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_task_description: "No description".to_string(),
            auto_finalize_on_last_task: false,
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
    #[error("Config source error: {0}")]
    Source(#[from] ::config::ConfigError),
}

impl AppConfig {
    /// Load configuration from the default file name and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_NAME))
    }

    /// Load configuration from an explicit file (extension optional) and the environment
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            auto_finalize = config.engine.auto_finalize_on_last_task,
            "Configuration loaded"
        );

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.default_task_description.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "engine.default_task_description".to_string(),
                message: "can't be blank".to_string(),
            });
        }
        Ok(())
    }
}

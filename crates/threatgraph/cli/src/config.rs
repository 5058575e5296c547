//! Configuration for the threatgraph CLI

use serde::{Deserialize, Serialize};
use threatgraph_analysis::{AnalysisConfig, ValidationConfig};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreatGraphConfig {
    /// Structural validator settings
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Path analyzer settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl ThreatGraphConfig {
    /// Load configuration: defaults, then the optional file, then
    /// `THREATGRAPH_*` environment variables.
    ///
    /// Nested keys use a double underscore, e.g.
    /// `THREATGRAPH_ANALYSIS__SHOW_SEVERITY=true`.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&ThreatGraphConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("THREATGRAPH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

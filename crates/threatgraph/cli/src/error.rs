//! CLI error types

use thiserror::Error;
use threatgraph_analysis::AnalysisError;
use threatgraph_model::ModelError;

/// Errors surfaced by the `threatgraph` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("model '{name}' failed validation with {errors} error(s)")]
    InvalidModel { name: String, errors: usize },
}

pub type CliResult<T> = Result<T, CliError>;

use std::path::PathBuf;

/// Errors raised while loading a model document.
///
/// Structural problems inside a successfully parsed document are never
/// reported here; they surface through the validator instead.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML document: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
}

use thiserror::Error;

/// Caller contract violations. Data problems never end up here: unknown
/// identifiers produce empty results and structural issues are reported by
/// the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("max_paths {requested} exceeds the configured ceiling of {ceiling}")]
    InvalidMaxPaths { requested: usize, ceiling: usize },

    #[error("max_paths must not be negative (got {0})")]
    NegativePathLimit(i64),
}

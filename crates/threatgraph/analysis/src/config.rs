//! Settings threaded explicitly through the validator and the analyzer.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Structural validator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Report duplicate definitions as errors instead of warnings
    #[serde(default)]
    pub strict_duplicates: bool,

    /// Treat a model with zero nodes as invalid
    #[serde(default)]
    pub reject_empty_model: bool,

    /// Warn about cycles in attack trees
    #[serde(default = "default_true")]
    pub report_cycles: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_duplicates: false,
            reject_empty_model: false,
            report_cycles: true,
        }
    }
}

/// Path analyzer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Attach node severities to analysis results
    #[serde(default)]
    pub show_severity: bool,

    /// Hard upper bound accepted for `max_paths`
    #[serde(default = "default_max_paths_ceiling")]
    pub max_paths_ceiling: usize,

    /// `max_paths` used by front ends when the caller gives none
    #[serde(default = "default_max_paths")]
    pub default_max_paths: usize,

    /// `top_n` used by front ends when the caller gives none
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            show_severity: false,
            max_paths_ceiling: default_max_paths_ceiling(),
            default_max_paths: default_max_paths(),
            default_top_n: default_top_n(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_paths_ceiling() -> usize {
    10_000
}

fn default_max_paths() -> usize {
    100
}

fn default_top_n() -> usize {
    10
}

/// A validated, non-negative path count coming from an untyped surface
/// (JSON request, command line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PathLimit(usize);

impl PathLimit {
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for PathLimit {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for PathLimit {
    type Error = AnalysisError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| AnalysisError::NegativePathLimit(value))
    }
}

use serde::{Deserialize, Serialize};

/// Outcome of a structural validation pass.
///
/// Suitable for direct serialization to a reporting collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when `errors` is empty. Warnings never affect validity.
    pub valid: bool,
    /// Number of check families that ran
    pub checks_performed: usize,
    /// Structural errors, in check order
    pub errors: Vec<String>,
    /// Non-fatal findings (duplicate definitions, tree cycles)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new(checks_performed: usize, errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            checks_performed,
            errors,
            warnings,
        }
    }
}

/// Degree ranking entry produced by `critical_nodes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CriticalNode {
    pub id: String,
    pub in_degree: usize,
    pub out_degree: usize,
    /// Always `in_degree + out_degree`
    pub total_degree: usize,
    /// Node severity, only when severity display is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<f64>,
}

/// Risk summary of a single attack path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathScore {
    /// Number of relationships traversed
    pub hops: usize,
    /// Highest node severity or exploited vulnerability score on the path
    pub max_severity: Option<f64>,
    /// Sum of node severities on the path
    pub total_severity: f64,
    /// Vulnerabilities exploited by the path's relationships, in path order
    pub vulnerabilities: Vec<String>,
}

#![deny(unsafe_code)]
//! # threatgraph-analysis
//!
//! Structural validation and attack-path queries over a loaded
//! [`ModelStore`].
//!
//! Everything here is read-only over the model. An [`Adjacency`] is derived
//! once from the store's relationships and then shared by:
//!
//! 1. **Validation**: dangling references, root and entry point checks,
//!    orphans, duplicate definitions, tree cycles
//! 2. **Path enumeration**: bounded depth-first search for simple paths
//! 3. **Shortest path**: breadth-first, fewest hops
//! 4. **Reachability**: everything downstream of a starting point
//! 5. **Critical nodes**: ranking by total degree
//! 6. **Path scoring**: severity and exploited vulnerabilities along a path
//!
//! Validation never fails: it returns the list of human-readable problems
//! found. Queries on unknown identifiers return empty results.

pub mod adjacency;
pub mod config;
pub mod error;
pub mod paths;
pub mod reports;
pub mod validation;

pub use adjacency::Adjacency;
pub use config::{AnalysisConfig, PathLimit, ValidationConfig};
pub use error::AnalysisError;
pub use paths::PathAnalyzer;
pub use reports::{CriticalNode, PathScore, ValidationReport};
pub use validation::StructuralValidator;

use threatgraph_model::ModelStore;

/// Validate `store` with default settings and return its structural errors.
///
/// An empty result means the model is structurally valid.
pub fn validate(store: &ModelStore) -> Vec<String> {
    let adjacency = Adjacency::build(store);
    StructuralValidator::default().validate(store, &adjacency)
}

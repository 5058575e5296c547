//! CLI command implementations

pub mod critical;
pub mod paths;
pub mod validate;

use std::path::Path;

use threatgraph_model::{load_path, ModelStore};
use tracing::info;

use crate::error::CliResult;

/// Load a model document and log its shape.
pub(crate) fn load_model(file: &Path) -> CliResult<ModelStore> {
    let store = load_path(file)?;
    info!(
        model = %store.name(),
        kind = %store.kind(),
        nodes = store.node_count(),
        relationships = store.relationship_count(),
        "Model ready"
    );
    Ok(store)
}

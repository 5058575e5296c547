//! Thin loader from TOML / JSON documents into a [`ModelStore`].
//!
//! The loader owns no semantics: it deserializes, then replays every entity
//! through [`ModelBuilder`] in document order.

use crate::builder::ModelBuilder;
use crate::entity::{Node, Relationship, Vulnerability};
use crate::error::ModelError;
use crate::store::ModelStore;
use crate::types::ModelKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Serialized form of one model document.
///
/// ```toml
/// name = "Corporate network"
/// kind = "attack-graph"
/// entry_points = ["internet"]
///
/// [[nodes]]
/// id = "web01"
/// label = "Web server"
/// kind = "host"
/// zone = "dmz"
///
/// [[edges]]
/// source = "internet"
/// target = "web01"
/// kind = "exploit"
/// vulnerability = "log4shell"
///
/// [[vulnerabilities]]
/// id = "log4shell"
/// score = 10.0
/// cve = "CVE-2021-44228"
/// host = "web01"
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelDocument {
    pub name: String,
    #[serde(default)]
    pub kind: ModelKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry_points: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default, alias = "relationships")]
    pub edges: Vec<Relationship>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vulnerabilities: Vec<Vulnerability>,
}

/// Document encodings the loader understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(ModelError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }
}

impl ModelDocument {
    pub fn from_toml_str(input: &str) -> Result<Self, ModelError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn parse(input: &str, format: DocumentFormat) -> Result<Self, ModelError> {
        match format {
            DocumentFormat::Toml => Self::from_toml_str(input),
            DocumentFormat::Json => Self::from_json_str(input),
        }
    }

    /// Replay the document through a [`ModelBuilder`].
    pub fn into_store(self) -> ModelStore {
        let mut builder = ModelBuilder::new(self.name, self.kind);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        for entry in self.entry_points {
            builder = builder.entry_point(entry);
        }
        for node in self.nodes {
            builder = builder.add_node(node);
        }
        for edge in self.edges {
            builder = builder.add_relationship(edge);
        }
        for vuln in self.vulnerabilities {
            builder = builder.add_vulnerability(vuln);
        }
        builder.build()
    }
}

/// Read, parse and build the model stored at `path`.
pub fn load_path(path: impl AsRef<Path>) -> Result<ModelStore, ModelError> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let input = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let store = ModelDocument::parse(&input, format)?.into_store();
    info!(
        path = %path.display(),
        model = %store.name(),
        nodes = store.node_count(),
        relationships = store.relationship_count(),
        "Loaded model document"
    );
    Ok(store)
}

use crate::builder::ModelBuilder;
use crate::entity::{Node, Relationship, Vulnerability};
use crate::types::{DuplicateDefinition, ModelKind};
use serde::Serialize;
use std::collections::HashMap;

/// Immutable holder of one loaded document.
///
/// Produced by [`ModelBuilder::build`]. Nothing in the store can be mutated
/// afterwards; edits go through [`ModelStore::to_builder`] and produce a
/// new store.
#[derive(Clone, Debug, Serialize)]
pub struct ModelStore {
    name: String,
    kind: ModelKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    entry_points: Vec<String>,
    nodes: Vec<Node>,
    relationships: Vec<Relationship>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    vulnerabilities: Vec<Vulnerability>,
    #[serde(skip)]
    node_index: HashMap<String, usize>,
    #[serde(skip)]
    vulnerability_index: HashMap<String, usize>,
    #[serde(skip)]
    overwritten: Vec<DuplicateDefinition>,
}

impl ModelStore {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        name: String,
        kind: ModelKind,
        root: Option<String>,
        entry_points: Vec<String>,
        nodes: Vec<Node>,
        relationships: Vec<Relationship>,
        vulnerabilities: Vec<Vulnerability>,
        overwritten: Vec<DuplicateDefinition>,
    ) -> Self {
        let node_index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
        let vulnerability_index = vulnerabilities
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.clone(), i))
            .collect();
        Self {
            name,
            kind,
            root,
            entry_points,
            nodes,
            relationships,
            vulnerabilities,
            node_index,
            vulnerability_index,
            overwritten,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Designated root (attack trees).
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Declared entry points (attack graphs and threat models).
    pub fn entry_points(&self) -> &[String] {
        &self.entry_points
    }

    /// Look up a node by identifier. Absence is not an error.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// All nodes in insertion order.
    pub fn all_nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All relationships in insertion order.
    pub fn all_relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn get_vulnerability(&self, id: &str) -> Option<&Vulnerability> {
        self.vulnerability_index
            .get(id)
            .map(|&i| &self.vulnerabilities[i])
    }

    /// All vulnerabilities in insertion order.
    pub fn all_vulnerabilities(&self) -> &[Vulnerability] {
        &self.vulnerabilities
    }

    /// Identifiers that were defined more than once while building, in the
    /// order the overwrites happened.
    pub fn overwritten_ids(&self) -> &[DuplicateDefinition] {
        &self.overwritten
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Start a new builder seeded with this store's contents.
    ///
    /// The overwrite history is not carried over; it describes how this
    /// store was loaded, not the edit.
    pub fn to_builder(&self) -> ModelBuilder {
        let mut builder = ModelBuilder::new(self.name.clone(), self.kind);
        if let Some(root) = &self.root {
            builder = builder.root(root.clone());
        }
        for entry in &self.entry_points {
            builder = builder.entry_point(entry.clone());
        }
        for node in &self.nodes {
            builder = builder.add_node(node.clone());
        }
        for rel in &self.relationships {
            builder = builder.add_relationship(rel.clone());
        }
        for vuln in &self.vulnerabilities {
            builder = builder.add_vulnerability(vuln.clone());
        }
        builder
    }
}

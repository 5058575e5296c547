use crate::entity::{Node, Relationship, Vulnerability};
use crate::store::ModelStore;
use crate::types::{DuplicateDefinition, EntityCategory, ModelKind};
use std::collections::HashMap;
use tracing::{debug, warn};

const SEVERITY_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Fluent builder that accumulates entities and finalises into an
/// immutable [`ModelStore`].
///
/// Redefining an identifier replaces the earlier definition in place (it
/// keeps the earlier insertion position). The overwrite is recorded and
/// exposed through [`ModelStore::overwritten_ids`].
#[derive(Clone, Debug)]
pub struct ModelBuilder {
    name: String,
    kind: ModelKind,
    root: Option<String>,
    entry_points: Vec<String>,
    nodes: Vec<Node>,
    node_index: HashMap<String, usize>,
    relationships: Vec<Relationship>,
    vulnerabilities: Vec<Vulnerability>,
    vulnerability_index: HashMap<String, usize>,
    overwritten: Vec<DuplicateDefinition>,
}

impl ModelBuilder {
    pub fn new(name: impl Into<String>, kind: ModelKind) -> Self {
        Self {
            name: name.into(),
            kind,
            root: None,
            entry_points: Vec::new(),
            nodes: Vec::new(),
            node_index: HashMap::new(),
            relationships: Vec::new(),
            vulnerabilities: Vec::new(),
            vulnerability_index: HashMap::new(),
            overwritten: Vec::new(),
        }
    }

    pub fn attack_tree(name: impl Into<String>, root: impl Into<String>) -> Self {
        Self::new(name, ModelKind::AttackTree).root(root)
    }

    pub fn attack_graph(name: impl Into<String>) -> Self {
        Self::new(name, ModelKind::AttackGraph)
    }

    pub fn threat_model(name: impl Into<String>) -> Self {
        Self::new(name, ModelKind::ThreatModel)
    }

    pub fn root(mut self, id: impl Into<String>) -> Self {
        self.root = Some(id.into());
        self
    }

    pub fn entry_point(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !self.entry_points.contains(&id) {
            self.entry_points.push(id);
        }
        self
    }

    pub fn add_node(mut self, node: Node) -> Self {
        if let Some(severity) = node.severity {
            if !SEVERITY_RANGE.contains(&severity) {
                warn!(node = %node.id, severity, "severity outside 0.0..=10.0");
            }
        }
        match self.node_index.get(&node.id) {
            Some(&i) => {
                warn!(node = %node.id, "duplicate node definition overwrites earlier one");
                self.overwritten.push(DuplicateDefinition {
                    id: node.id.clone(),
                    category: EntityCategory::Node,
                });
                self.nodes[i] = node;
            }
            None => {
                self.node_index.insert(node.id.clone(), self.nodes.len());
                self.nodes.push(node);
            }
        }
        self
    }

    pub fn add_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Shorthand for a plain edge between two identifiers.
    pub fn add_edge(self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.add_relationship(Relationship::new(source, target))
    }

    pub fn add_vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        if !SEVERITY_RANGE.contains(&vulnerability.score) {
            warn!(
                vulnerability = %vulnerability.id,
                score = vulnerability.score,
                "vulnerability score outside 0.0..=10.0"
            );
        }
        match self.vulnerability_index.get(&vulnerability.id) {
            Some(&i) => {
                warn!(vulnerability = %vulnerability.id, "duplicate vulnerability definition overwrites earlier one");
                self.overwritten.push(DuplicateDefinition {
                    id: vulnerability.id.clone(),
                    category: EntityCategory::Vulnerability,
                });
                self.vulnerabilities[i] = vulnerability;
            }
            None => {
                self.vulnerability_index
                    .insert(vulnerability.id.clone(), self.vulnerabilities.len());
                self.vulnerabilities.push(vulnerability);
            }
        }
        self
    }

    pub fn build(self) -> ModelStore {
        debug!(
            model = %self.name,
            kind = %self.kind,
            nodes = self.nodes.len(),
            relationships = self.relationships.len(),
            vulnerabilities = self.vulnerabilities.len(),
            "Built model store"
        );
        ModelStore::from_parts(
            self.name,
            self.kind,
            self.root,
            self.entry_points,
            self.nodes,
            self.relationships,
            self.vulnerabilities,
            self.overwritten,
        )
    }
}

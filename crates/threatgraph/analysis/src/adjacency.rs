use std::collections::{HashMap, HashSet};

use threatgraph_model::ModelStore;
use tracing::debug;

/// Forward and reverse neighbour sets derived from a model's relationships.
///
/// Identifiers are interned to dense indices in registration order: declared
/// nodes first (insertion order), then any relationship endpoint that is not
/// a declared node. Dangling endpoints are kept so the validator can see
/// them. Neighbour sets preserve first-insertion order; a repeated
/// (source, target) pair does not add a second entry.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    identifiers: Vec<String>,
    index: HashMap<String, usize>,
    forward: Vec<Vec<usize>>,
    reverse: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Adjacency {
    /// Derive adjacency from every relationship in `store`.
    pub fn build(store: &ModelStore) -> Self {
        let mut adjacency = Self::default();

        for node in store.all_nodes() {
            adjacency.intern(&node.id);
        }

        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        for rel in store.all_relationships() {
            let source = adjacency.intern(&rel.source);
            let target = adjacency.intern(&rel.target);
            if seen.insert((source, target)) {
                adjacency.forward[source].push(target);
                adjacency.reverse[target].push(source);
            }
            adjacency.edge_count += 1;
        }

        debug!(
            model = %store.name(),
            identifiers = adjacency.identifiers.len(),
            relationships = adjacency.edge_count,
            "Built adjacency"
        );

        adjacency
    }

    fn intern(&mut self, id: &str) -> usize {
        if let Some(&i) = self.index.get(id) {
            return i;
        }
        let i = self.identifiers.len();
        self.identifiers.push(id.to_string());
        self.index.insert(id.to_string(), i);
        self.forward.push(Vec::new());
        self.reverse.push(Vec::new());
        i
    }

    /// Whether `id` is a declared node or a relationship endpoint.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Every known identifier in registration order.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Number of relationships that contributed, parallel ones included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Identifiers `id` points to, in insertion order. Empty when unknown.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.index
            .get(id)
            .map(|&i| self.names(&self.forward[i]))
            .unwrap_or_default()
    }

    /// Identifiers pointing to `id`, in insertion order. Empty when unknown.
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.index
            .get(id)
            .map(|&i| self.names(&self.reverse[i]))
            .unwrap_or_default()
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.index.get(id).map_or(0, |&i| self.forward[i].len())
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.index.get(id).map_or(0, |&i| self.reverse[i].len())
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn name(&self, index: usize) -> &str {
        &self.identifiers[index]
    }

    pub(crate) fn forward_of(&self, index: usize) -> &[usize] {
        &self.forward[index]
    }

    pub(crate) fn reverse_of(&self, index: usize) -> &[usize] {
        &self.reverse[index]
    }

    fn names(&self, indices: &[usize]) -> Vec<&str> {
        indices.iter().map(|&i| self.identifiers[i].as_str()).collect()
    }

    pub(crate) fn owned_names(&self, indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| self.identifiers[i].clone()).collect()
    }
}

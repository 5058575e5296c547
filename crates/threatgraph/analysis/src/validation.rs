use std::collections::VecDeque;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use threatgraph_model::ModelStore;
use tracing::debug;

use crate::adjacency::Adjacency;
use crate::config::ValidationConfig;
use crate::reports::ValidationReport;

/// Structural validation of a loaded model.
///
/// Checks, in output order:
/// 1. Dangling references (relationship endpoints, vulnerability links)
/// 2. Missing root (trees) / undefined entry points (graphs, threat models)
/// 3. Orphan nodes, unreachable from the root or entry points
/// 4. Duplicate definitions recorded by the builder
/// 5. Cycles in attack trees
/// 6. Empty model
///
/// Every check runs; findings accumulate. Validation never fails; an empty
/// error list means the model is structurally valid.
#[derive(Debug, Clone, Default)]
pub struct StructuralValidator {
    config: ValidationConfig,
}

#[derive(Default)]
struct Findings {
    checks: usize,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl StructuralValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Error strings only, in check order.
    pub fn validate(&self, store: &ModelStore, adjacency: &Adjacency) -> Vec<String> {
        self.report(store, adjacency).errors
    }

    /// Errors plus warnings.
    pub fn report(&self, store: &ModelStore, adjacency: &Adjacency) -> ValidationReport {
        let mut findings = Findings::default();

        check_dangling_references(store, &mut findings);
        check_root(store, &mut findings);
        check_orphans(store, adjacency, &mut findings);
        self.check_duplicates(store, &mut findings);
        if self.config.report_cycles && store.kind().is_tree() {
            check_tree_cycles(adjacency, &mut findings);
        }
        if self.config.reject_empty_model {
            findings.checks += 1;
            if store.is_empty() {
                findings
                    .errors
                    .push(format!("model '{}' contains no nodes", store.name()));
            }
        }

        debug!(
            model = %store.name(),
            checks = findings.checks,
            errors = findings.errors.len(),
            warnings = findings.warnings.len(),
            "Validated model"
        );

        ValidationReport::new(findings.checks, findings.errors, findings.warnings)
    }

    fn check_duplicates(&self, store: &ModelStore, findings: &mut Findings) {
        findings.checks += 1;
        for dup in store.overwritten_ids() {
            let msg = format!(
                "duplicate {} definition '{}' overwrote an earlier definition",
                dup.category, dup.id
            );
            if self.config.strict_duplicates {
                findings.errors.push(msg);
            } else {
                findings.warnings.push(msg);
            }
        }
    }
}

fn check_dangling_references(store: &ModelStore, findings: &mut Findings) {
    findings.checks += 1;

    // One error per relationship, naming every unresolved reference it holds.
    for rel in store.all_relationships() {
        let mut missing: Vec<&str> = Vec::new();
        if !store.contains_node(&rel.source) {
            missing.push(&rel.source);
        }
        if !store.contains_node(&rel.target) && rel.target != rel.source {
            missing.push(&rel.target);
        }
        let missing_vuln = rel
            .vulnerability
            .as_deref()
            .filter(|v| store.get_vulnerability(v).is_none());

        let mut problems = Vec::new();
        if !missing.is_empty() {
            problems.push(format!("undefined node(s): {}", missing.join(", ")));
        }
        if let Some(vuln_id) = missing_vuln {
            problems.push(format!("undefined vulnerability '{}'", vuln_id));
        }
        if !problems.is_empty() {
            findings.errors.push(format!(
                "relationship '{}' references {}",
                rel,
                problems.join("; ")
            ));
        }
    }

    for vuln in store.all_vulnerabilities() {
        if !store.contains_node(&vuln.host) {
            findings.errors.push(format!(
                "vulnerability '{}' references undefined host '{}'",
                vuln.id, vuln.host
            ));
        }
    }
}

fn check_root(store: &ModelStore, findings: &mut Findings) {
    findings.checks += 1;

    if store.kind().is_tree() {
        match store.root() {
            None => findings
                .errors
                .push(format!("attack tree '{}' has no designated root", store.name())),
            Some(root) if !store.contains_node(root) => findings
                .errors
                .push(format!("root '{}' is not defined as a node", root)),
            Some(_) => {}
        }
    } else {
        for entry in store.entry_points() {
            if !store.contains_node(entry) {
                findings
                    .errors
                    .push(format!("entry point '{}' is not defined as a node", entry));
            }
        }
    }
}

/// Breadth-first reachability from the root (trees) or the declared entry
/// points (other kinds). Skipped when there is nothing to start from.
fn check_orphans(store: &ModelStore, adjacency: &Adjacency, findings: &mut Findings) {
    let (starts, origin): (Vec<usize>, String) = if store.kind().is_tree() {
        match store.root().filter(|r| store.contains_node(r)) {
            Some(root) => (
                adjacency.index_of(root).into_iter().collect(),
                format!("root '{}'", root),
            ),
            None => return,
        }
    } else {
        let starts: Vec<usize> = store
            .entry_points()
            .iter()
            .filter(|e| store.contains_node(e))
            .filter_map(|e| adjacency.index_of(e))
            .collect();
        (starts, "any entry point".to_string())
    };
    if starts.is_empty() {
        return;
    }
    findings.checks += 1;

    let mut visited = vec![false; adjacency.len()];
    let mut queue = VecDeque::new();
    for &s in &starts {
        if !visited[s] {
            visited[s] = true;
            queue.push_back(s);
        }
    }
    while let Some(current) = queue.pop_front() {
        for &next in adjacency.forward_of(current) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    for node in store.all_nodes() {
        let reached = adjacency
            .index_of(&node.id)
            .map_or(false, |i| visited[i]);
        if !reached {
            findings.errors.push(format!(
                "orphan node '{}' is not reachable from {}",
                node.id, origin
            ));
        }
    }
}

fn check_tree_cycles(adjacency: &Adjacency, findings: &mut Findings) {
    findings.checks += 1;

    let mut graph = DiGraphMap::<usize, ()>::new();
    for i in 0..adjacency.len() {
        graph.add_node(i);
        for &j in adjacency.forward_of(i) {
            graph.add_edge(i, j, ());
        }
    }

    let mut cycles: Vec<Vec<usize>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|mut scc| {
            scc.sort_unstable();
            scc
        })
        .collect();
    cycles.sort();

    for cycle in cycles {
        if cycle.len() == 1 {
            findings.warnings.push(format!(
                "self-loop on node '{}'",
                adjacency.name(cycle[0])
            ));
        } else {
            findings.warnings.push(format!(
                "cycle detected among nodes: {}",
                adjacency.owned_names(&cycle).join(", ")
            ));
        }
    }
}

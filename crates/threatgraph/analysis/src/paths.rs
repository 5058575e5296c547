use std::cmp::Ordering;
use std::collections::{HashMap, HashSet, VecDeque};

use threatgraph_model::ModelStore;
use tracing::debug;

use crate::adjacency::Adjacency;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::reports::{CriticalNode, PathScore};

/// Attack-path queries over a derived [`Adjacency`].
///
/// Queries are answered lazily and never touch the model. Unknown
/// identifiers yield empty results rather than errors. Only caller contract
/// violations (a `max_paths` above the configured ceiling) are `Err`.
#[derive(Debug, Clone)]
pub struct PathAnalyzer<'a> {
    adjacency: &'a Adjacency,
    config: AnalysisConfig,
    store: Option<&'a ModelStore>,
    /// Vulnerabilities exploited per (source, target), in relationship order.
    exploits: HashMap<(&'a str, &'a str), Vec<&'a str>>,
}

impl<'a> PathAnalyzer<'a> {
    pub fn new(adjacency: &'a Adjacency, config: AnalysisConfig) -> Self {
        Self {
            adjacency,
            config,
            store: None,
            exploits: HashMap::new(),
        }
    }

    /// Attach the model the adjacency was built from. Needed for severity
    /// annotations and path scoring.
    pub fn with_store(mut self, store: &'a ModelStore) -> Self {
        self.exploits.clear();
        for rel in store.all_relationships() {
            if let Some(vuln_id) = rel.vulnerability.as_deref() {
                self.exploits
                    .entry((rel.source.as_str(), rel.target.as_str()))
                    .or_default()
                    .push(vuln_id);
            }
        }
        self.store = Some(store);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    // =========================================================================
    // PATH ENUMERATION
    // =========================================================================

    /// Enumerate simple paths from `start` to `end`, depth-first.
    ///
    /// Neighbours are explored in insertion order, so the result is
    /// deterministic. Enumeration stops once `max_paths` paths have been
    /// collected; the cap is what keeps this usable on cyclic or highly
    /// branching graphs.
    pub fn find_paths(
        &self,
        start: &str,
        end: &str,
        max_paths: usize,
    ) -> Result<Vec<Vec<String>>, AnalysisError> {
        if max_paths > self.config.max_paths_ceiling {
            return Err(AnalysisError::InvalidMaxPaths {
                requested: max_paths,
                ceiling: self.config.max_paths_ceiling,
            });
        }
        if max_paths == 0 {
            return Ok(Vec::new());
        }
        let (Some(from), Some(to)) = (self.adjacency.index_of(start), self.adjacency.index_of(end))
        else {
            return Ok(Vec::new());
        };
        if from == to {
            return Ok(vec![vec![start.to_string()]]);
        }

        let found = self.collect_paths(from, to, max_paths);

        debug!(start, end, max_paths, found = found.len(), "Enumerated paths");

        Ok(found
            .iter()
            .map(|p| self.adjacency.owned_names(p))
            .collect())
    }

    /// Depth-first enumeration with an explicit stack, so path length is
    /// bounded by memory rather than by the thread's stack.
    fn collect_paths(&self, from: usize, to: usize, max_paths: usize) -> Vec<Vec<usize>> {
        let mut found = Vec::new();
        let mut on_path = vec![false; self.adjacency.len()];
        // (node, index of the next neighbour to try)
        let mut stack: Vec<(usize, usize)> = vec![(from, 0)];
        on_path[from] = true;

        while let Some(frame) = stack.last_mut() {
            if found.len() >= max_paths {
                break;
            }
            let (current, cursor) = *frame;
            let Some(&next) = self.adjacency.forward_of(current).get(cursor) else {
                on_path[current] = false;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if on_path[next] {
                continue;
            }
            if next == to {
                let mut path: Vec<usize> = stack.iter().map(|&(node, _)| node).collect();
                path.push(next);
                found.push(path);
            } else {
                on_path[next] = true;
                stack.push((next, 0));
            }
        }

        found
    }

    /// Enumerate paths with a limit coming from an untyped surface.
    pub fn find_paths_limited(
        &self,
        start: &str,
        end: &str,
        limit: i64,
    ) -> Result<Vec<Vec<String>>, AnalysisError> {
        let limit = crate::config::PathLimit::try_from(limit)?;
        self.find_paths(start, end, limit.get())
    }

    // =========================================================================
    // SHORTEST PATH
    // =========================================================================

    /// Breadth-first shortest path. Ties go to the neighbour inserted first.
    pub fn shortest_path(&self, start: &str, end: &str) -> Option<Vec<String>> {
        let from = self.adjacency.index_of(start)?;
        let to = self.adjacency.index_of(end)?;
        if from == to {
            return Some(vec![start.to_string()]);
        }

        let mut came_from: Vec<Option<usize>> = vec![None; self.adjacency.len()];
        let mut visited = vec![false; self.adjacency.len()];
        let mut queue = VecDeque::new();
        visited[from] = true;
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            for &next in self.adjacency.forward_of(current) {
                if visited[next] {
                    continue;
                }
                visited[next] = true;
                came_from[next] = Some(current);

                if next == to {
                    let mut path = vec![to];
                    let mut cur = to;
                    while let Some(prev) = came_from[cur] {
                        path.push(prev);
                        cur = prev;
                    }
                    path.reverse();
                    debug!(start, end, hops = path.len() - 1, "Found shortest path");
                    return Some(self.adjacency.owned_names(&path));
                }

                queue.push_back(next);
            }
        }

        None
    }

    /// Everything reachable from `start` via forward edges, in BFS order,
    /// excluding `start` itself.
    pub fn reachable_from(&self, start: &str) -> Vec<String> {
        let Some(from) = self.adjacency.index_of(start) else {
            return Vec::new();
        };
        let mut visited = vec![false; self.adjacency.len()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();
        visited[from] = true;
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            for &next in self.adjacency.forward_of(current) {
                if !visited[next] {
                    visited[next] = true;
                    order.push(next);
                    queue.push_back(next);
                }
            }
        }

        self.adjacency.owned_names(&order)
    }

    // =========================================================================
    // CRITICAL NODES
    // =========================================================================

    /// Rank identifiers by total degree, descending; ties by identifier.
    pub fn critical_nodes(&self, top_n: usize) -> Vec<CriticalNode> {
        let mut ranked: Vec<CriticalNode> = (0..self.adjacency.len())
            .map(|i| {
                let id = self.adjacency.name(i);
                let in_degree = self.adjacency.reverse_of(i).len();
                let out_degree = self.adjacency.forward_of(i).len();
                CriticalNode {
                    id: id.to_string(),
                    in_degree,
                    out_degree,
                    total_degree: in_degree + out_degree,
                    severity: self.severity_of(id),
                }
            })
            .collect();

        ranked.sort_by(|a, b| match b.total_degree.cmp(&a.total_degree) {
            Ordering::Equal => a.id.cmp(&b.id),
            other => other,
        });
        ranked.truncate(top_n);
        ranked
    }

    fn severity_of(&self, id: &str) -> Option<f64> {
        if !self.config.show_severity {
            return None;
        }
        self.store
            .and_then(|s| s.get_node(id))
            .and_then(|n| n.severity)
    }

    // =========================================================================
    // PATH SCORING
    // =========================================================================

    /// Summarise the risk carried by a path returned from this analyzer.
    ///
    /// Severities are read from the attached store regardless of the display
    /// setting; without a store only `hops` is meaningful.
    pub fn path_score(&self, path: &[String]) -> PathScore {
        let hops = path.len().saturating_sub(1);
        let Some(store) = self.store else {
            return PathScore {
                hops,
                max_severity: None,
                total_severity: 0.0,
                vulnerabilities: Vec::new(),
            };
        };

        let mut max_severity: Option<f64> = None;
        let mut total_severity = 0.0;
        for id in path {
            if let Some(sev) = store.get_node(id).and_then(|n| n.severity) {
                total_severity += sev;
                max_severity = Some(max_severity.map_or(sev, |m| m.max(sev)));
            }
        }

        let mut vulnerabilities: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for step in path.windows(2) {
            let Some(exploited) = self.exploits.get(&(step[0].as_str(), step[1].as_str())) else {
                continue;
            };
            for &vuln_id in exploited {
                if !seen.insert(vuln_id) {
                    continue;
                }
                if let Some(score) = store.get_vulnerability(vuln_id).map(|v| v.score) {
                    max_severity = Some(max_severity.map_or(score, |m| m.max(score)));
                }
                vulnerabilities.push(vuln_id.to_string());
            }
        }

        PathScore {
            hops,
            max_severity,
            total_severity,
            vulnerabilities,
        }
    }
}

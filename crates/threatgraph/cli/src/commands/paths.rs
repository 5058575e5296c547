//! Attack-path commands: enumeration, shortest path, reachability

use std::path::Path;

use serde::Serialize;
use tabled::Tabled;
use threatgraph_analysis::{Adjacency, AnalysisConfig, PathAnalyzer, PathScore};

use super::load_model;
use crate::error::CliResult;
use crate::output::{format_path, format_score, print_output, print_warning, OutputFormat};

/// A path together with its risk summary
#[derive(Debug, Serialize)]
pub struct ScoredPath {
    pub path: Vec<String>,
    pub score: PathScore,
}

#[derive(Tabled)]
struct PathRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Hops")]
    hops: usize,
    #[tabled(rename = "Max severity")]
    max_severity: String,
    #[tabled(rename = "Vulnerabilities")]
    vulnerabilities: String,
    #[tabled(rename = "Path")]
    path: String,
}

impl PathRow {
    fn from_scored(rank: usize, scored: &ScoredPath) -> Self {
        Self {
            rank,
            hops: scored.score.hops,
            max_severity: format_score(scored.score.max_severity),
            vulnerabilities: scored.score.vulnerabilities.join(", "),
            path: format_path(&scored.path),
        }
    }
}

#[derive(Tabled)]
struct ReachableRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Identifier")]
    id: String,
}

/// Enumerate up to `max` paths. `None` uses the configured default.
pub fn execute_paths(
    file: &Path,
    from: &str,
    to: &str,
    max: Option<i64>,
    config: &AnalysisConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let store = load_model(file)?;
    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, config.clone()).with_store(&store);

    let paths = match max {
        Some(limit) => analyzer.find_paths_limited(from, to, limit)?,
        None => analyzer.find_paths(from, to, config.default_max_paths)?,
    };
    let scored = score_all(&analyzer, paths);

    if scored.is_empty() && format == OutputFormat::Table {
        print_warning(&format!("No path from '{from}' to '{to}'"));
        return Ok(());
    }

    print_output(
        &scored,
        || {
            scored
                .iter()
                .enumerate()
                .map(|(i, s)| PathRow::from_scored(i + 1, s))
                .collect()
        },
        format,
    )
}

/// Print the fewest-hop path, if any.
pub fn execute_shortest(
    file: &Path,
    from: &str,
    to: &str,
    config: &AnalysisConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let store = load_model(file)?;
    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, config.clone()).with_store(&store);

    let shortest: Option<ScoredPath> = analyzer.shortest_path(from, to).map(|path| ScoredPath {
        score: analyzer.path_score(&path),
        path,
    });

    match (&shortest, format) {
        (None, OutputFormat::Table) => {
            print_warning(&format!("No path from '{from}' to '{to}'"));
            Ok(())
        }
        _ => print_output(
            &shortest,
            || {
                shortest
                    .iter()
                    .map(|s| PathRow::from_scored(1, s))
                    .collect()
            },
            format,
        ),
    }
}

/// Print everything reachable from `from`, nearest first.
pub fn execute_reachable(
    file: &Path,
    from: &str,
    config: &AnalysisConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let store = load_model(file)?;
    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, config.clone());
    let reachable = analyzer.reachable_from(from);

    print_output(
        &reachable,
        || {
            reachable
                .iter()
                .enumerate()
                .map(|(i, id)| ReachableRow {
                    rank: i + 1,
                    id: id.clone(),
                })
                .collect()
        },
        format,
    )
}

fn score_all(analyzer: &PathAnalyzer<'_>, paths: Vec<Vec<String>>) -> Vec<ScoredPath> {
    paths
        .into_iter()
        .map(|path| ScoredPath {
            score: analyzer.path_score(&path),
            path,
        })
        .collect()
}

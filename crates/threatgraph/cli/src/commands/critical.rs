//! Critical node ranking command

use std::path::Path;

use tabled::Tabled;
use threatgraph_analysis::{Adjacency, AnalysisConfig, CriticalNode, PathAnalyzer};

use super::load_model;
use crate::error::CliResult;
use crate::output::{format_score, print_output, OutputFormat};

#[derive(Tabled)]
struct CriticalRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Identifier")]
    id: String,
    #[tabled(rename = "In")]
    in_degree: usize,
    #[tabled(rename = "Out")]
    out_degree: usize,
    #[tabled(rename = "Total")]
    total_degree: usize,
    #[tabled(rename = "Severity")]
    severity: String,
}

impl CriticalRow {
    fn new(rank: usize, node: &CriticalNode) -> Self {
        Self {
            rank,
            id: node.id.clone(),
            in_degree: node.in_degree,
            out_degree: node.out_degree,
            total_degree: node.total_degree,
            severity: format_score(node.severity),
        }
    }
}

/// Rank the `top` most connected identifiers. `None` uses the configured
/// default.
pub fn execute(
    file: &Path,
    top: Option<usize>,
    config: &AnalysisConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let store = load_model(file)?;
    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, config.clone()).with_store(&store);
    let ranked = analyzer.critical_nodes(top.unwrap_or(config.default_top_n));

    print_output(
        &ranked,
        || {
            ranked
                .iter()
                .enumerate()
                .map(|(i, node)| CriticalRow::new(i + 1, node))
                .collect()
        },
        format,
    )
}

//! Structural validation command

use std::path::Path;

use threatgraph_analysis::{Adjacency, StructuralValidator, ValidationConfig, ValidationReport};
use threatgraph_model::ModelStore;

use super::load_model;
use crate::error::{CliError, CliResult};
use crate::output::{print_error, print_info, print_single, print_success, print_warning, OutputFormat};

/// Validate a model file. Fails with [`CliError::InvalidModel`] when the
/// report carries errors, after the report has been printed.
pub fn execute(file: &Path, config: &ValidationConfig, format: OutputFormat) -> CliResult<()> {
    let store = load_model(file)?;
    let report = run(&store, config);

    match format {
        OutputFormat::Table => print_report(&store, &report),
        OutputFormat::Json | OutputFormat::Yaml => print_single(&report, format)?,
    }

    if report.valid {
        Ok(())
    } else {
        Err(CliError::InvalidModel {
            name: store.name().to_string(),
            errors: report.errors.len(),
        })
    }
}

pub(crate) fn run(store: &ModelStore, config: &ValidationConfig) -> ValidationReport {
    let adjacency = Adjacency::build(store);
    StructuralValidator::new(config.clone()).report(store, &adjacency)
}

fn print_report(store: &ModelStore, report: &ValidationReport) {
    print_info(&format!(
        "{} '{}': {} nodes, {} relationships, {} vulnerabilities",
        store.kind(),
        store.name(),
        store.node_count(),
        store.relationship_count(),
        store.all_vulnerabilities().len()
    ));

    for error in &report.errors {
        print_error(error);
    }
    for warning in &report.warnings {
        print_warning(warning);
    }

    if report.valid {
        print_success(&format!(
            "Structurally valid ({} checks, {} warning(s))",
            report.checks_performed,
            report.warnings.len()
        ));
    }
}

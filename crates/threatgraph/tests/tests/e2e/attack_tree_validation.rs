//! End-to-end test: structural validation of attack trees.
//!
//! Covers dangling references, root handling, orphan detection and the
//! warning-only findings (duplicates, cycles).

use threatgraph_analysis::{validate, Adjacency, StructuralValidator, ValidationConfig};
use threatgraph_model::{ModelBuilder, Node};
use threatgraph_tests::{four_node_tree, tree_with_orphan};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn well_formed_tree_is_valid() {
    let store = four_node_tree().build();
    assert!(validate(&store).is_empty());
}

#[test]
fn single_orphan_is_reported_once() {
    let errors = validate(&tree_with_orphan());
    assert_eq!(errors.len(), 1, "unexpected errors: {errors:?}");
    assert!(errors[0].contains("Orphan"));
}

#[test]
fn removing_the_orphan_removes_only_its_report() {
    let with_orphan = validate(&tree_with_orphan());
    let without_orphan = validate(&four_node_tree().build());

    let remaining: Vec<&String> = with_orphan
        .iter()
        .filter(|e| !e.contains("Orphan"))
        .collect();
    assert_eq!(remaining.len(), without_orphan.len());
}

#[test]
fn undefined_target_is_reported() {
    let store = four_node_tree().add_edge("Root", "Undefined").build();
    let errors = validate(&store);
    assert!(errors.iter().any(|e| e.contains("Undefined")));
}

#[test]
fn undefined_source_and_target_share_one_error() {
    let store = four_node_tree().add_edge("GhostA", "GhostB").build();
    let errors = validate(&store);
    let dangling: Vec<&String> = errors.iter().filter(|e| e.contains("GhostA")).collect();
    assert_eq!(dangling.len(), 1);
    assert!(dangling[0].contains("GhostB"));
}

#[test]
fn tree_without_root_is_invalid() {
    let store = ModelBuilder::new("rootless", threatgraph_model::ModelKind::AttackTree)
        .add_node(Node::new("A", "A"))
        .build();
    let errors = validate(&store);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("no designated root"));
}

#[test]
fn undefined_root_suppresses_orphan_noise() {
    let store = ModelBuilder::attack_tree("t", "Missing")
        .add_node(Node::new("A", "A"))
        .add_node(Node::new("B", "B"))
        .build();
    let errors = validate(&store);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Missing"));
}

#[test]
fn duplicate_definitions_warn_by_default_and_fail_when_strict() {
    let store = four_node_tree()
        .add_node(Node::new("Leaf", "Send a better lure"))
        .build();
    let adjacency = Adjacency::build(&store);

    let lenient = StructuralValidator::default().report(&store, &adjacency);
    assert!(lenient.valid);
    assert_eq!(lenient.warnings.len(), 1);
    assert!(lenient.warnings[0].contains("Leaf"));

    let strict = StructuralValidator::new(ValidationConfig {
        strict_duplicates: true,
        ..Default::default()
    })
    .report(&store, &adjacency);
    assert!(!strict.valid);
    assert!(strict.errors[0].contains("Leaf"));
    // The later definition wins.
    assert_eq!(store.get_node("Leaf").map(|n| n.label.as_str()), Some("Send a better lure"));
}

#[test]
fn cycle_in_tree_is_a_warning() {
    let store = four_node_tree().add_edge("Leaf", "Root").build();
    let adjacency = Adjacency::build(&store);
    let report = StructuralValidator::default().report(&store, &adjacency);

    assert!(report.valid);
    assert!(report.warnings.iter().any(|w| w.contains("cycle")));

    let quiet = StructuralValidator::new(ValidationConfig {
        report_cycles: false,
        ..Default::default()
    })
    .report(&store, &adjacency);
    assert!(quiet.warnings.is_empty());
}

#[test]
fn empty_model_rejection_is_opt_in() {
    let store = ModelBuilder::attack_graph("empty").build();
    assert!(validate(&store).is_empty());

    let adjacency = Adjacency::build(&store);
    let errors = StructuralValidator::new(ValidationConfig {
        reject_empty_model: true,
        ..Default::default()
    })
    .validate(&store, &adjacency);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("no nodes"));
}

#[test]
fn validation_is_repeatable() {
    let store = tree_with_orphan();
    assert_eq!(validate(&store), validate(&store));
}

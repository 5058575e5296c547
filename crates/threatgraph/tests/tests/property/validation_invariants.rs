//! Property tests: validation of random attack trees.
//!
//! Trees are generated with a known connected core and a known set of
//! orphans, so the expected orphan reports can be stated exactly.

use proptest::prelude::*;
use threatgraph_analysis::{validate, Adjacency, StructuralValidator};
use threatgraph_model::{ModelBuilder, Node};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parent index for each non-root core node; parent `i` always precedes
/// child `i + 1`, so the core is connected from `c0`.
fn arb_parents() -> impl Strategy<Value = Vec<usize>> {
    (1usize..10).prop_flat_map(|size| {
        (1..size)
            .map(|child| 0..child)
            .collect::<Vec<_>>()
    })
}

fn core_tree(parents: &[usize]) -> ModelBuilder {
    let mut builder = ModelBuilder::attack_tree("random-tree", "c0").add_node(Node::new("c0", "c0"));
    for (i, &parent) in parents.iter().enumerate() {
        let child = format!("c{}", i + 1);
        builder = builder
            .add_node(Node::new(child.as_str(), child.as_str()))
            .add_edge(format!("c{parent}"), child);
    }
    builder
}

fn with_orphans(builder: ModelBuilder, orphans: usize) -> ModelBuilder {
    (0..orphans).fold(builder, |b, i| {
        let id = format!("orphan{i}");
        b.add_node(Node::new(id.as_str(), id.as_str()))
    })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// A connected tree is always valid.
    #[test]
    fn connected_tree_is_valid(parents in arb_parents()) {
        let store = core_tree(&parents).build();
        prop_assert!(validate(&store).is_empty());
    }

    /// Exactly one report per orphan, naming it.
    #[test]
    fn each_orphan_reported_once(parents in arb_parents(), orphans in 0usize..6) {
        let store = with_orphans(core_tree(&parents), orphans).build();
        let errors = validate(&store);

        prop_assert_eq!(errors.len(), orphans);
        for i in 0..orphans {
            let needle = format!("'orphan{i}'");
            prop_assert_eq!(errors.iter().filter(|e| e.contains(&needle)).count(), 1);
        }
    }

    /// Removing orphans removes exactly their reports and nothing else.
    #[test]
    fn orphan_reports_are_monotonic(
        parents in arb_parents(),
        orphans in 1usize..6,
        removed in 0usize..6,
    ) {
        let removed = removed.min(orphans);
        let before = validate(&with_orphans(core_tree(&parents), orphans).build());
        let after = validate(&with_orphans(core_tree(&parents), orphans - removed).build());

        prop_assert_eq!(before.len() - after.len(), removed);
        for error in &after {
            prop_assert!(before.contains(error));
        }
    }

    /// A dangling child adds one reference error without creating orphans.
    #[test]
    fn dangling_edge_adds_one_error(parents in arb_parents(), attach in 0usize..10) {
        let attach = attach % (parents.len() + 1);
        let store = core_tree(&parents)
            .add_edge(format!("c{attach}"), "Undefined")
            .build();
        let errors = validate(&store);

        prop_assert_eq!(errors.len(), 1);
        prop_assert!(errors[0].contains("Undefined"));
    }

    /// The report agrees with the plain error list.
    #[test]
    fn report_matches_error_list(parents in arb_parents(), orphans in 0usize..4) {
        let store = with_orphans(core_tree(&parents), orphans).build();
        let adjacency = Adjacency::build(&store);
        let validator = StructuralValidator::default();

        let report = validator.report(&store, &adjacency);
        let errors = validator.validate(&store, &adjacency);
        prop_assert_eq!(report.valid, errors.is_empty());
        prop_assert_eq!(report.errors, errors);
    }
}

//! End-to-end test: attack-path queries over attack graphs and threat models.

use threatgraph_analysis::{validate, Adjacency, AnalysisConfig, AnalysisError, PathAnalyzer};
use threatgraph_tests::{corporate_network, ids, linear_chain, threat_model};

// ---------------------------------------------------------------------------
// Linear chain
// ---------------------------------------------------------------------------

#[test]
fn linear_chain_has_exactly_one_path() {
    let store = linear_chain();
    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, AnalysisConfig::default());

    let expected = ids(&["start", "h1", "h2", "h3", "target"]);
    assert_eq!(
        analyzer.find_paths("start", "target", 5).unwrap(),
        vec![expected.clone()]
    );
    assert_eq!(analyzer.shortest_path("start", "target"), Some(expected));
}

#[test]
fn linear_chain_is_valid_and_fully_reachable() {
    let store = linear_chain();
    assert!(validate(&store).is_empty());

    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, AnalysisConfig::default());
    assert_eq!(
        analyzer.reachable_from("start"),
        ids(&["h1", "h2", "h3", "target"])
    );
}

#[test]
fn same_start_and_end() {
    let store = linear_chain();
    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, AnalysisConfig::default());

    assert!(analyzer.find_paths("h2", "h2", 0).unwrap().is_empty());
    for n in 1..4 {
        assert_eq!(analyzer.find_paths("h2", "h2", n).unwrap(), vec![ids(&["h2"])]);
    }
}

// ---------------------------------------------------------------------------
// Corporate network
// ---------------------------------------------------------------------------

#[test]
fn corporate_network_is_valid() {
    assert!(validate(&corporate_network()).is_empty());
}

#[test]
fn both_routes_to_the_database_are_found() {
    let store = corporate_network();
    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, AnalysisConfig::default());

    let paths = analyzer.find_paths("internet", "db01", 10).unwrap();
    assert_eq!(
        paths,
        vec![
            ids(&["internet", "web01", "app01", "db01"]),
            ids(&["internet", "web01", "ws01", "app01", "db01"]),
        ]
    );

    let shortest = analyzer.shortest_path("internet", "db01").unwrap();
    assert!(paths.iter().all(|p| shortest.len() <= p.len()));
}

#[test]
fn cycle_does_not_trap_enumeration() {
    let store = corporate_network();
    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, AnalysisConfig::default());

    // ws01 <-> fs01 is a cycle; every returned path is simple.
    let paths = analyzer.find_paths("web01", "fs01", 100).unwrap();
    assert_eq!(paths, vec![ids(&["web01", "ws01", "fs01"])]);
    assert_eq!(analyzer.reachable_from("ws01"), ids(&["fs01", "app01", "db01"]));
}

#[test]
fn shortest_path_is_scored() {
    let store = corporate_network();
    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, AnalysisConfig::default()).with_store(&store);

    let path = analyzer.shortest_path("internet", "db01").unwrap();
    let score = analyzer.path_score(&path);
    assert_eq!(score.hops, 3);
    assert_eq!(score.max_severity, Some(10.0));
    assert!((score.total_severity - 22.5).abs() < 1e-9);
    assert_eq!(score.vulnerabilities, ids(&["log4shell", "weak-db-creds"]));
}

#[test]
fn no_route_back_to_the_internet() {
    let store = corporate_network();
    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, AnalysisConfig::default());

    assert!(analyzer.find_paths("db01", "internet", 10).unwrap().is_empty());
    assert!(analyzer.shortest_path("db01", "internet").is_none());
}

#[test]
fn oversized_request_is_rejected() {
    let store = corporate_network();
    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(
        &adjacency,
        AnalysisConfig {
            max_paths_ceiling: 50,
            ..Default::default()
        },
    );
    assert!(matches!(
        analyzer.find_paths("internet", "db01", 51),
        Err(AnalysisError::InvalidMaxPaths { requested: 51, ceiling: 50 })
    ));
}

// ---------------------------------------------------------------------------
// Threat model
// ---------------------------------------------------------------------------

#[test]
fn threat_model_data_flows() {
    let store = threat_model();
    assert!(validate(&store).is_empty());

    let adjacency = Adjacency::build(&store);
    let analyzer = PathAnalyzer::new(&adjacency, AnalysisConfig::default());
    assert_eq!(
        analyzer.shortest_path("browser", "orders"),
        Some(ids(&["browser", "api", "orders"]))
    );
    assert_eq!(
        analyzer.reachable_from("browser"),
        ids(&["api", "orders", "payments"])
    );
}

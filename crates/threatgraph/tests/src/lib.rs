//! Shared fixtures for the threatgraph test suites.
//!
//! Each builder returns a fresh [`ModelStore`] describing a small but
//! realistic model. Suites under `tests/` combine them with the analysis
//! crate.

use threatgraph_model::{
    ModelBuilder, ModelStore, Node, NodeKind, Relationship, RelationshipKind, Vulnerability,
};

/// `Root -> Child1`, `Root -> Child2`, `Child1 -> Leaf`.
pub fn four_node_tree() -> ModelBuilder {
    ModelBuilder::attack_tree("steal-credentials", "Root")
        .add_node(Node::new("Root", "Steal credentials").with_kind(NodeKind::Goal))
        .add_node(Node::new("Child1", "Phish user").with_kind(NodeKind::Attack))
        .add_node(Node::new("Child2", "Dump LSASS").with_kind(NodeKind::Attack))
        .add_node(Node::new("Leaf", "Send lure").with_kind(NodeKind::Attack))
        .add_edge("Root", "Child1")
        .add_edge("Root", "Child2")
        .add_edge("Child1", "Leaf")
}

/// The four-node tree plus an unconnected `Orphan`.
pub fn tree_with_orphan() -> ModelStore {
    four_node_tree()
        .add_node(Node::new("Orphan", "Bribe admin").with_kind(NodeKind::Attack))
        .build()
}

/// `start -> h1 -> h2 -> h3 -> target`
pub fn linear_chain() -> ModelStore {
    let hops = ["start", "h1", "h2", "h3", "target"];
    let mut builder = ModelBuilder::attack_graph("chain").entry_point("start");
    for id in hops {
        builder = builder.add_node(Node::new(id, id).with_kind(NodeKind::Host));
    }
    for pair in hops.windows(2) {
        builder = builder.add_edge(pair[0], pair[1]);
    }
    builder.build()
}

/// A small corporate network with vulnerabilities, a cycle between the
/// workstation and the file server, and two routes to the database.
///
/// ```text
/// internet -> web01 -> app01 -> db01
///                 \              ^
///                  -> ws01 <-> fs01
///                        \-> app01
/// ```
pub fn corporate_network() -> ModelStore {
    ModelBuilder::attack_graph("corp-network")
        .entry_point("internet")
        .add_node(Node::new("internet", "Internet").with_kind(NodeKind::External))
        .add_node(
            Node::new("web01", "Public web server")
                .with_kind(NodeKind::Host)
                .with_severity(7.5)
                .with_attribute("zone", "dmz"),
        )
        .add_node(
            Node::new("app01", "Application server")
                .with_kind(NodeKind::Host)
                .with_severity(6.0),
        )
        .add_node(
            Node::new("db01", "Customer database")
                .with_kind(NodeKind::DataStore)
                .with_severity(9.0),
        )
        .add_node(Node::new("ws01", "Admin workstation").with_kind(NodeKind::Host))
        .add_node(Node::new("fs01", "File server").with_kind(NodeKind::Host).with_severity(4.0))
        .add_relationship(
            Relationship::new("internet", "web01")
                .with_kind(RelationshipKind::Exploit)
                .with_vulnerability("log4shell"),
        )
        .add_relationship(Relationship::new("web01", "app01").with_kind(RelationshipKind::NetworkEdge))
        .add_relationship(
            Relationship::new("app01", "db01")
                .with_kind(RelationshipKind::Exploit)
                .with_vulnerability("weak-db-creds"),
        )
        .add_relationship(Relationship::new("web01", "ws01").with_label("shared admin account"))
        .add_edge("ws01", "fs01")
        .add_edge("fs01", "ws01")
        .add_edge("ws01", "app01")
        .add_vulnerability(
            Vulnerability::new("log4shell", 10.0, "web01").with_cve("CVE-2021-44228"),
        )
        .add_vulnerability(Vulnerability::new("weak-db-creds", 8.1, "db01"))
        .build()
}

/// Data-flow diagram style threat model.
pub fn threat_model() -> ModelStore {
    ModelBuilder::threat_model("checkout-service")
        .entry_point("browser")
        .add_node(Node::new("browser", "Customer browser").with_kind(NodeKind::External))
        .add_node(Node::new("api", "Checkout API").with_kind(NodeKind::Process))
        .add_node(Node::new("payments", "Payment processor").with_kind(NodeKind::External))
        .add_node(Node::new("orders", "Orders table").with_kind(NodeKind::DataStore))
        .add_relationship(
            Relationship::new("browser", "api")
                .with_kind(RelationshipKind::DataFlow)
                .with_label("HTTPS"),
        )
        .add_relationship(Relationship::new("api", "orders").with_kind(RelationshipKind::DataFlow))
        .add_relationship(Relationship::new("api", "payments").with_kind(RelationshipKind::DataFlow))
        .build()
}

/// Identifier list helper for assertions.
pub fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

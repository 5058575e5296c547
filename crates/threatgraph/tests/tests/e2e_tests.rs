#[path = "e2e/attack_tree_validation.rs"]
mod attack_tree_validation;

#[path = "e2e/attack_graph_paths.rs"]
mod attack_graph_paths;

#[path = "e2e/critical_nodes.rs"]
mod critical_nodes;

#[path = "e2e/document_loading.rs"]
mod document_loading;

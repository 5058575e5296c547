#![deny(unsafe_code)]
//! # threatgraph-model
//!
//! In-memory model of one threat diagram document: an attack tree, an
//! attack graph or a threat model.
//!
//! A document is loaded once into an immutable [`ModelStore`] holding typed
//! nodes, relationships and vulnerabilities keyed by identifier. Stores are
//! assembled through the fluent [`ModelBuilder`]; the [`document`] module is
//! a thin TOML / JSON front end over the same builder.
//!
//! ## Key Types
//!
//! - [`Node`]: host, privilege, goal, process, ... with a free-form attribute bag
//! - [`Relationship`]: directed edge between two identifiers
//! - [`Vulnerability`]: scored weakness attached to a node
//! - [`ModelStore`]: immutable, O(1) lookup by identifier
//! - [`ModelBuilder`]: accumulates entities, records duplicate definitions

pub mod builder;
pub mod document;
pub mod entity;
pub mod error;
pub mod store;
pub mod types;

pub use builder::ModelBuilder;
pub use document::{load_path, DocumentFormat, ModelDocument};
pub use entity::{Node, Relationship, Vulnerability};
pub use error::ModelError;
pub use store::ModelStore;
pub use types::{
    AttributeValue, Attributes, DuplicateDefinition, EntityCategory, ModelKind, NodeKind,
    RelationshipKind,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Free-form attribute bag attached to nodes and relationships.
///
/// Keys are kept sorted so iteration (and therefore rendering) is
/// deterministic.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// A single attribute value. The set of value kinds is deliberately closed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Which diagram family a model describes.
///
/// Trees carry a single designated root; graphs and threat models may
/// declare a set of entry points instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    AttackTree,
    #[default]
    AttackGraph,
    ThreatModel,
}

impl ModelKind {
    pub fn is_tree(&self) -> bool {
        matches!(self, Self::AttackTree)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttackTree => write!(f, "attack tree"),
            Self::AttackGraph => write!(f, "attack graph"),
            Self::ThreatModel => write!(f, "threat model"),
        }
    }
}

/// Node variants across all model kinds.
///
/// Validation and path analysis never look at the variant; it only matters
/// to rendering collaborators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    // Attack graphs
    Host,
    Privilege,
    Service,
    // Attack trees
    Goal,
    Attack,
    Mitigation,
    // Threat models
    External,
    Process,
    DataStore,
    #[default]
    Generic,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Host => "Host",
            Self::Privilege => "Privilege",
            Self::Service => "Service",
            Self::Goal => "Goal",
            Self::Attack => "Attack",
            Self::Mitigation => "Mitigation",
            Self::External => "External",
            Self::Process => "Process",
            Self::DataStore => "DataStore",
            Self::Generic => "Node",
        };
        write!(f, "{}", s)
    }
}

/// Relationship variants across all model kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipKind {
    Exploit,
    DataFlow,
    NetworkEdge,
    #[default]
    Edge,
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exploit => write!(f, "Exploit"),
            Self::DataFlow => write!(f, "DataFlow"),
            Self::NetworkEdge => write!(f, "NetworkEdge"),
            Self::Edge => write!(f, "Edge"),
        }
    }
}

/// Entity category of a definition that was overwritten during building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityCategory {
    Node,
    Vulnerability,
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => write!(f, "node"),
            Self::Vulnerability => write!(f, "vulnerability"),
        }
    }
}

/// Record of an identifier defined more than once. The later definition wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateDefinition {
    pub id: String,
    pub category: EntityCategory,
}

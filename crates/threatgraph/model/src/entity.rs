use crate::types::{AttributeValue, Attributes, NodeKind, RelationshipKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in an attack tree, attack graph or threat model.
///
/// Any document field that is not one of the named fields below lands in
/// `attributes` (e.g. `zone`, `os`, `ip`, `isTrusted`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, unique within one model.
    pub id: String,
    /// Display label. Empty means "use the id".
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub kind: NodeKind,
    /// Severity score, nominally within [0.0, 10.0]. Not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<f64>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: NodeKind::default(),
            severity: None,
            attributes: Attributes::new(),
        }
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_severity(mut self, severity: f64) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Label to render, falling back to the identifier.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}

/// A directed relationship between two node identifiers.
///
/// Endpoints are plain identifiers; nothing guarantees they resolve to a
/// node. Unresolved endpoints are reported by the structural validator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub kind: RelationshipKind,
    /// Identifier of the vulnerability this relationship exploits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vulnerability: Option<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Relationship {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: String::new(),
            kind: RelationshipKind::default(),
            vulnerability: None,
            attributes: Attributes::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_kind(mut self, kind: RelationshipKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_vulnerability(mut self, vulnerability_id: impl Into<String>) -> Self {
        self.vulnerability = Some(vulnerability_id.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "{} -> {}", self.source, self.target)
        } else {
            write!(f, "{} -> {} ({})", self.source, self.target, self.label)
        }
    }
}

/// A known vulnerability attached to a host (or any node).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    /// Score, nominally within [0.0, 10.0]. Not enforced.
    pub score: f64,
    /// External reference, usually a CVE id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cve: Option<String>,
    /// Identifier of the affected node.
    pub host: String,
}

impl Vulnerability {
    pub fn new(id: impl Into<String>, score: f64, host: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            score,
            cve: None,
            host: host.into(),
        }
    }

    pub fn with_cve(mut self, cve: impl Into<String>) -> Self {
        self.cve = Some(cve.into());
        self
    }
}

// Slot metadata: the declared, named child positions of a group schema

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::schema::{GroupSchema, SegmentSchema};

/// Whether a slot holds segments (leaves) or groups (internal nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    #[serde(rename = "segment")]
    Segment,
    #[serde(rename = "group")]
    Group,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Segment => write!(f, "segment"),
            ElementKind::Group => write!(f, "group"),
        }
    }
}

/// Stable identity of a slot: its declared position within the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The schema a slot instantiates when a blank child is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "schema")]
pub enum ElementSchema {
    #[serde(rename = "segment")]
    Segment(Arc<SegmentSchema>),
    #[serde(rename = "group")]
    Group(Arc<GroupSchema>),
}

impl ElementSchema {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementSchema::Segment(_) => ElementKind::Segment,
            ElementSchema::Group(_) => ElementKind::Group,
        }
    }

    /// The element type name, e.g. `PID` or `ORU_R01_PATIENT`.
    pub fn type_name(&self) -> &str {
        match self {
            ElementSchema::Segment(schema) => schema.name(),
            ElementSchema::Group(schema) => schema.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDescriptor {
    pub name: String,
    pub element: ElementSchema,
    pub required: bool,
    pub repeating: bool,
    /// Zero-based declaration position; equal to the slot's `SlotId`.
    #[serde(default)]
    pub position: usize,
}

impl SlotDescriptor {
    pub fn id(&self) -> SlotId {
        SlotId(self.position)
    }

    pub fn kind(&self) -> ElementKind {
        self.element.kind()
    }

    pub fn element_type(&self) -> &str {
        self.element.type_name()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_optional(&self) -> bool {
        !self.required
    }

    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    /// Cardinality in HL7 notation: `[1..1]`, `[0..*]`, ...
    pub fn cardinality(&self) -> String {
        let min = if self.required { "1" } else { "0" };
        let max = if self.repeating { "*" } else { "1" };
        format!("[{min}..{max}]")
    }
}

impl fmt::Display for SlotDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.kind(), self.element_type())?;
        write!(f, " {}", self.cardinality())
    }
}

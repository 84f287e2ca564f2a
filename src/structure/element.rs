use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use super::group::Group;
use super::message::MessageContext;
use super::segment::Segment;
use crate::error::{Hl7StructureError, Result};
use crate::types::{ElementKind, ElementSchema, GroupSchema, SlotDescriptor, SlotId};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one element instance, used to remove it by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Non-owning link from an element to the group slot it was created in.
///
/// Holds the parent's identity and schema, never the parent itself.
#[derive(Debug, Clone)]
pub struct ParentRef {
    id: ElementId,
    schema: Arc<GroupSchema>,
    slot: SlotId,
}

impl ParentRef {
    pub(crate) fn new(id: ElementId, schema: &Arc<GroupSchema>, slot: SlotId) -> Self {
        Self {
            id,
            schema: Arc::clone(schema),
            slot,
        }
    }

    /// Identity of the parent group instance.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Type name of the parent group, e.g. `ORU_R01_PATIENT`.
    pub fn name(&self) -> &str {
        self.schema.name()
    }

    pub fn schema(&self) -> &Arc<GroupSchema> {
        &self.schema
    }

    pub fn slot_id(&self) -> SlotId {
        self.slot
    }

    /// The parent slot this element occupies.
    pub fn slot(&self) -> &SlotDescriptor {
        &self.schema.slots()[self.slot.index()]
    }
}

/// A node of the structure tree: a segment leaf or a group.
#[derive(Debug)]
pub enum MessageElement {
    Segment(Segment),
    Group(Group),
}

impl MessageElement {
    /// Blank instance honouring `schema`, attached to the given message
    /// context and parent slot.
    pub(crate) fn blank(
        schema: &ElementSchema,
        context: &Weak<MessageContext>,
        parent: ParentRef,
    ) -> Self {
        match schema {
            ElementSchema::Segment(segment) => MessageElement::Segment(Segment::attached(
                Arc::clone(segment),
                context.clone(),
                Some(parent),
            )),
            ElementSchema::Group(group) => MessageElement::Group(Group::attached(
                Arc::clone(group),
                context.clone(),
                Some(parent),
            )),
        }
    }

    pub fn id(&self) -> ElementId {
        match self {
            MessageElement::Segment(segment) => segment.id(),
            MessageElement::Group(group) => group.id(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            MessageElement::Segment(_) => ElementKind::Segment,
            MessageElement::Group(_) => ElementKind::Group,
        }
    }

    /// Element type name (`PID`, `ORU_R01_PATIENT`, ...).
    pub fn name(&self) -> &str {
        match self {
            MessageElement::Segment(segment) => segment.name(),
            MessageElement::Group(group) => group.name(),
        }
    }

    pub fn context(&self) -> Option<Arc<MessageContext>> {
        match self {
            MessageElement::Segment(segment) => segment.context(),
            MessageElement::Group(group) => group.context(),
        }
    }

    pub fn parent(&self) -> Option<&ParentRef> {
        match self {
            MessageElement::Segment(segment) => segment.parent(),
            MessageElement::Group(group) => group.parent(),
        }
    }

    pub fn parent_slot(&self) -> Option<&SlotDescriptor> {
        self.parent().map(ParentRef::slot)
    }

    pub(crate) fn detach_parent(&mut self) {
        match self {
            MessageElement::Segment(segment) => segment.parent = None,
            MessageElement::Group(group) => group.parent = None,
        }
    }

    /// True when no field anywhere below this element holds a value.
    pub fn is_empty(&self) -> bool {
        match self {
            MessageElement::Segment(segment) => segment.is_empty(),
            MessageElement::Group(group) => group.is_empty(),
        }
    }

    pub fn as_segment(&self) -> Result<&Segment> {
        match self {
            MessageElement::Segment(segment) => Ok(segment),
            MessageElement::Group(_) => Err(self.mismatch(ElementKind::Segment)),
        }
    }

    pub fn as_segment_mut(&mut self) -> Result<&mut Segment> {
        match self {
            MessageElement::Segment(segment) => Ok(segment),
            MessageElement::Group(group) => Err(Hl7StructureError::TypeMismatch {
                name: group.name().to_string(),
                expected: ElementKind::Segment,
                found: ElementKind::Group,
            }),
        }
    }

    pub fn as_group(&self) -> Result<&Group> {
        match self {
            MessageElement::Group(group) => Ok(group),
            MessageElement::Segment(_) => Err(self.mismatch(ElementKind::Group)),
        }
    }

    pub fn as_group_mut(&mut self) -> Result<&mut Group> {
        match self {
            MessageElement::Group(group) => Ok(group),
            MessageElement::Segment(segment) => Err(Hl7StructureError::TypeMismatch {
                name: segment.name().to_string(),
                expected: ElementKind::Group,
                found: ElementKind::Segment,
            }),
        }
    }

    pub fn into_segment(self) -> Result<Segment> {
        match self {
            MessageElement::Segment(segment) => Ok(segment),
            other => Err(other.mismatch(ElementKind::Segment)),
        }
    }

    pub fn into_group(self) -> Result<Group> {
        match self {
            MessageElement::Group(group) => Ok(group),
            other => Err(other.mismatch(ElementKind::Group)),
        }
    }

    fn mismatch(&self, expected: ElementKind) -> Hl7StructureError {
        Hl7StructureError::TypeMismatch {
            name: self.name().to_string(),
            expected,
            found: self.kind(),
        }
    }
}

impl From<Segment> for MessageElement {
    fn from(segment: Segment) -> Self {
        MessageElement::Segment(segment)
    }
}

impl From<Group> for MessageElement {
    fn from(group: Group) -> Self {
        MessageElement::Group(group)
    }
}

// Segment and group schemas, and the fail-fast builders that declare them

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::field::FieldDescriptor;
use super::resolver::NameIndexResolver;
use super::slot::{ElementSchema, SlotDescriptor, SlotId};
use crate::config::DeclarationPolicy;
use crate::error::{Hl7StructureError, Result};

static SEGMENT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9]{2}$").expect("segment name pattern"));
static STRUCTURE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("structure name pattern"));

/// Ordered field declarations of one segment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SegmentSchemaRepr")]
pub struct SegmentSchema {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    fields: Vec<FieldDescriptor>,
}

impl SegmentSchema {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Fields in declaration (wire) order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Descriptor for a one-based field position.
    pub fn field(&self, position: usize) -> Option<&FieldDescriptor> {
        position.checked_sub(1).and_then(|index| self.fields.get(index))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Display for SegmentSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment({}) [{} fields]", self.name, self.fields.len())
    }
}

#[derive(Deserialize)]
struct SegmentSchemaRepr {
    name: String,
    #[serde(default)]
    description: Option<String>,
    fields: Vec<FieldDescriptor>,
}

impl TryFrom<SegmentSchemaRepr> for SegmentSchema {
    type Error = Hl7StructureError;

    fn try_from(repr: SegmentSchemaRepr) -> Result<Self> {
        let mut builder = SegmentSchemaBuilder::new(repr.name);
        if let Some(description) = repr.description {
            builder = builder.with_description(description);
        }
        repr.fields
            .into_iter()
            .fold(builder, SegmentSchemaBuilder::field)
            .build_schema()
    }
}

/// Declares a segment schema field by field.
///
/// Positions are assigned in declaration order starting at 1. A field that
/// carries an explicit, disagreeing position is a declaration error.
#[derive(Debug)]
pub struct SegmentSchemaBuilder {
    name: String,
    description: Option<String>,
    policy: DeclarationPolicy,
    fields: Vec<FieldDescriptor>,
    error: Option<Hl7StructureError>,
}

impl SegmentSchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            policy: DeclarationPolicy::Strict,
            fields: Vec::new(),
            error: None,
        }
    }

    /// Under [`DeclarationPolicy::Lenient`] a skipped field frees its
    /// position: every later field moves down by one.
    pub fn with_policy(mut self, policy: DeclarationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, mut field: FieldDescriptor) -> Self {
        if self.error.is_some() {
            return self;
        }

        let expected = self.fields.len() + 1;
        let problem = if field.datatype.trim().is_empty() {
            Some(format!("field {expected} has no datatype"))
        } else if field.position != 0 && field.position != expected {
            Some(format!(
                "field declared at position {} but expected {expected}",
                field.position
            ))
        } else {
            None
        };

        match problem {
            None => {
                field.position = expected;
                self.fields.push(field);
            }
            Some(message) => self.reject(message),
        }
        self
    }

    pub fn build(self) -> Result<Arc<SegmentSchema>> {
        self.build_schema().map(Arc::new)
    }

    fn build_schema(self) -> Result<SegmentSchema> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if !SEGMENT_NAME.is_match(&self.name) {
            return Err(Hl7StructureError::declaration(
                &self.name,
                "segment names are three upper-case letters or digits",
            ));
        }

        tracing::debug!(
            "Declared segment {} with {} fields",
            self.name,
            self.fields.len()
        );
        Ok(SegmentSchema {
            name: self.name,
            description: self.description,
            fields: self.fields,
        })
    }

    fn reject(&mut self, message: String) {
        match self.policy {
            DeclarationPolicy::Strict => {
                self.error = Some(Hl7StructureError::declaration(&self.name, message));
            }
            DeclarationPolicy::Lenient => {
                tracing::warn!(
                    "Skipping invalid field declaration in segment {}: {}",
                    self.name,
                    message
                );
            }
        }
    }
}

/// Ordered slot declarations of one group (or message) structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GroupSchemaRepr")]
pub struct GroupSchema {
    name: String,
    slots: Vec<SlotDescriptor>,
    #[serde(skip)]
    resolver: NameIndexResolver,
}

impl GroupSchema {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slots in declaration (wire) order.
    pub fn slots(&self) -> &[SlotDescriptor] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> Option<&SlotDescriptor> {
        self.slots.get(id.index())
    }

    pub fn resolve(&self, name: &str) -> Option<SlotId> {
        self.resolver.resolve(name)
    }

    pub fn slot_by_name(&self, name: &str) -> Option<&SlotDescriptor> {
        self.resolve(name).and_then(|id| self.slot(id))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for GroupSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group({}) [", self.name)?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}{}", slot.name, slot.cardinality())?;
        }
        write!(f, "]")
    }
}

#[derive(Deserialize)]
struct GroupSchemaRepr {
    name: String,
    slots: Vec<SlotDescriptor>,
}

impl TryFrom<GroupSchemaRepr> for GroupSchema {
    type Error = Hl7StructureError;

    fn try_from(repr: GroupSchemaRepr) -> Result<Self> {
        if let Some((index, slot)) = repr
            .slots
            .iter()
            .enumerate()
            .find(|(index, slot)| slot.position != 0 && slot.position != *index)
        {
            return Err(Hl7StructureError::declaration(
                &repr.name,
                format!(
                    "slot '{}' declared at position {} but expected {index}",
                    slot.name, slot.position
                ),
            ));
        }

        repr.slots
            .into_iter()
            .fold(GroupSchemaBuilder::new(repr.name), |builder, slot| {
                builder.declare(Some(&slot.name), slot.element, slot.required, slot.repeating)
            })
            .build_schema()
    }
}

/// Declares a group schema slot by slot.
///
/// Under [`DeclarationPolicy::Strict`] the first bad declaration poisons the
/// builder and `build` returns it. Under [`DeclarationPolicy::Lenient`] bad
/// declarations are logged and skipped, which leaves a partial schema.
#[derive(Debug)]
pub struct GroupSchemaBuilder {
    name: String,
    policy: DeclarationPolicy,
    slots: Vec<SlotDescriptor>,
    resolver: NameIndexResolver,
    error: Option<Hl7StructureError>,
}

impl GroupSchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            policy: DeclarationPolicy::Strict,
            slots: Vec::new(),
            resolver: NameIndexResolver::new(),
            error: None,
        }
    }

    pub fn with_policy(mut self, policy: DeclarationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn segment(self, schema: Arc<SegmentSchema>, required: bool, repeating: bool) -> Self {
        self.declare(None, ElementSchema::Segment(schema), required, repeating)
    }

    pub fn group(self, schema: Arc<GroupSchema>, required: bool, repeating: bool) -> Self {
        self.declare(None, ElementSchema::Group(schema), required, repeating)
    }

    /// Declare a slot. Without an explicit `name` the slot is named after its
    /// element type, suffixed if that name is already taken.
    pub fn declare(
        mut self,
        name: Option<&str>,
        element: ElementSchema,
        required: bool,
        repeating: bool,
    ) -> Self {
        if self.error.is_some() {
            return self;
        }

        let name = match name {
            Some(explicit) => explicit.to_string(),
            None => self.resolver.disambiguate(element.type_name()),
        };

        if let Some(message) = self.check_slot(&name, &element) {
            self.reject(message);
            return self;
        }

        let id = SlotId(self.slots.len());
        self.resolver.register(&name, id);
        self.slots.push(SlotDescriptor {
            name,
            element,
            required,
            repeating,
            position: id.index(),
        });
        self
    }

    pub fn build(self) -> Result<Arc<GroupSchema>> {
        self.build_schema().map(Arc::new)
    }

    fn build_schema(self) -> Result<GroupSchema> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if !STRUCTURE_NAME.is_match(&self.name) {
            return Err(Hl7StructureError::declaration(
                &self.name,
                "group names are upper-case letters, digits and underscores",
            ));
        }
        if self.slots.is_empty() {
            return Err(Hl7StructureError::declaration(
                &self.name,
                "a group must declare at least one slot",
            ));
        }

        tracing::debug!("Declared group {} with {} slots", self.name, self.slots.len());
        Ok(GroupSchema {
            name: self.name,
            slots: self.slots,
            resolver: self.resolver,
        })
    }

    fn check_slot(&self, name: &str, element: &ElementSchema) -> Option<String> {
        if !STRUCTURE_NAME.is_match(name) {
            return Some(format!("invalid slot name '{name}'"));
        }
        if self.resolver.contains(name) {
            return Some(format!("slot name '{name}' is already declared"));
        }
        if let ElementSchema::Group(group) = element {
            if group.is_empty() {
                return Some(format!("group slot '{name}' declares no children"));
            }
        }
        None
    }

    fn reject(&mut self, message: String) {
        match self.policy {
            DeclarationPolicy::Strict => {
                self.error = Some(Hl7StructureError::declaration(&self.name, message));
            }
            DeclarationPolicy::Lenient => {
                tracing::warn!(
                    "Skipping invalid slot declaration in group {}: {}",
                    self.name,
                    message
                );
            }
        }
    }
}

use std::sync::{Arc, Weak};

use super::element::{ElementId, ParentRef};
use super::message::MessageContext;
use super::repetition;
use crate::error::{Hl7StructureError, Result};
use crate::types::{FieldDescriptor, FieldValue, SegmentSchema, SlotDescriptor};

/// A segment instance: per declared field, a contiguous list of repetitions.
///
/// Fields are addressed by their one-based position. Every repetition store
/// starts empty and grows on demand, following the same at-most-one-past-the-end
/// rule as group slots.
#[derive(Debug)]
pub struct Segment {
    id: ElementId,
    schema: Arc<SegmentSchema>,
    values: Vec<Vec<FieldValue>>,
    context: Weak<MessageContext>,
    pub(crate) parent: Option<ParentRef>,
}

impl Segment {
    /// A detached segment with no message context.
    pub fn new(schema: Arc<SegmentSchema>) -> Self {
        Self::attached(schema, Weak::new(), None)
    }

    pub(crate) fn attached(
        schema: Arc<SegmentSchema>,
        context: Weak<MessageContext>,
        parent: Option<ParentRef>,
    ) -> Self {
        let values = std::iter::repeat_with(Vec::new)
            .take(schema.field_count())
            .collect();
        Self {
            id: ElementId::next(),
            schema,
            values,
            context,
            parent,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.schema.name()
    }

    pub fn schema(&self) -> &Arc<SegmentSchema> {
        &self.schema
    }

    pub fn context(&self) -> Option<Arc<MessageContext>> {
        self.context.upgrade()
    }

    /// The group slot holding this segment; `None` when detached.
    pub fn parent(&self) -> Option<&ParentRef> {
        self.parent.as_ref()
    }

    pub fn parent_slot(&self) -> Option<&SlotDescriptor> {
        self.parent().map(ParentRef::slot)
    }

    /// Field declarations in wire order.
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        self.schema.fields()
    }

    pub fn descriptor(&self, position: usize) -> Result<&FieldDescriptor> {
        self.schema
            .field(position)
            .ok_or_else(|| self.field_not_found(position))
    }

    pub fn field_repetitions_used(&self, position: usize) -> Result<usize> {
        Ok(self.fields(position)?.len())
    }

    /// Every stored repetition of a field, in index order.
    pub fn fields(&self, position: usize) -> Result<&[FieldValue]> {
        let index = self.index(position)?;
        Ok(&self.values[index])
    }

    /// Repetition `rep` (zero-based) of a field. `rep` equal to the current
    /// count appends a blank repetition; anything further out is an error.
    pub fn get_field(&mut self, position: usize, rep: usize) -> Result<&mut FieldValue> {
        let index = self.index(position)?;
        let descriptor = &self.schema.fields()[index];
        let store = &mut self.values[index];

        let label = || field_label(&self.schema, position);
        if repetition::check_access(label, descriptor.repeating, rep, store.len())? {
            tracing::trace!("Creating {}-{} repetition {}", self.schema.name(), position, rep);
            store.push(FieldValue::default());
        }
        Ok(&mut store[rep])
    }

    /// Read-only lookup; never creates a repetition.
    pub fn field_value(&self, position: usize, rep: usize) -> Result<Option<&FieldValue>> {
        Ok(self.fields(position)?.get(rep))
    }

    pub fn set_field(
        &mut self,
        position: usize,
        rep: usize,
        value: impl Into<FieldValue>,
    ) -> Result<()> {
        *self.get_field(position, rep)? = value.into();
        Ok(())
    }

    /// Append a new blank repetition and return it.
    pub fn add_field_repetition(&mut self, position: usize) -> Result<&mut FieldValue> {
        let index = self.index(position)?;
        let descriptor = &self.schema.fields()[index];
        let store = &mut self.values[index];

        let label = || field_label(&self.schema, position);
        repetition::check_append(label, descriptor.repeating, store.len())?;
        store.push(FieldValue::default());
        let last = store.len() - 1;
        Ok(&mut store[last])
    }

    /// Remove repetition `rep`; later repetitions shift down by one.
    pub fn remove_field_repetition(&mut self, position: usize, rep: usize) -> Result<FieldValue> {
        let index = self.index(position)?;
        let store = &mut self.values[index];
        let label = || field_label(&self.schema, position);
        repetition::check_existing(label, rep, store.len())?;
        Ok(store.remove(rep))
    }

    /// Drop every repetition of a field.
    pub fn clear_field(&mut self, position: usize) -> Result<()> {
        let index = self.index(position)?;
        self.values[index].clear();
        Ok(())
    }

    /// True when no repetition of any field holds text.
    pub fn is_empty(&self) -> bool {
        self.values.iter().flatten().all(FieldValue::is_empty)
    }

    fn index(&self, position: usize) -> Result<usize> {
        match position.checked_sub(1) {
            Some(index) if index < self.values.len() => Ok(index),
            _ => Err(self.field_not_found(position)),
        }
    }

    fn field_not_found(&self, position: usize) -> Hl7StructureError {
        Hl7StructureError::FieldNotFound {
            segment: self.schema.name().to_string(),
            position,
        }
    }
}

fn field_label(schema: &SegmentSchema, position: usize) -> String {
    format!("{}-{}", schema.name(), position)
}

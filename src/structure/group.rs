use std::sync::{Arc, Weak};

use super::element::{ElementId, MessageElement, ParentRef};
use super::message::MessageContext;
use super::repetition;
use super::segment::Segment;
use crate::error::{Hl7StructureError, Result};
use crate::types::{GroupSchema, SlotDescriptor, SlotId};

/// Anything that names a slot of a group: its name or its declared position.
pub trait SlotKey {
    fn resolve(&self, schema: &GroupSchema) -> Result<SlotId>;
}

impl SlotKey for &str {
    fn resolve(&self, schema: &GroupSchema) -> Result<SlotId> {
        schema
            .resolve(self)
            .ok_or_else(|| Hl7StructureError::StructureNotFound {
                group: schema.name().to_string(),
                name: self.to_string(),
            })
    }
}

impl SlotKey for &String {
    fn resolve(&self, schema: &GroupSchema) -> Result<SlotId> {
        self.as_str().resolve(schema)
    }
}

impl SlotKey for String {
    fn resolve(&self, schema: &GroupSchema) -> Result<SlotId> {
        self.as_str().resolve(schema)
    }
}

impl SlotKey for SlotId {
    fn resolve(&self, schema: &GroupSchema) -> Result<SlotId> {
        match schema.slot(*self) {
            Some(_) => Ok(*self),
            None => Err(Hl7StructureError::StructureNotFound {
                group: schema.name().to_string(),
                name: self.to_string(),
            }),
        }
    }
}

/// A group instance: per declared slot, a contiguous list of child elements.
///
/// The slot list is fixed by the schema and never reordered. Children are
/// created lazily: `get_structure` creates the first instance on demand,
/// `add_structure` always appends, and instances only go away through the
/// `remove_*` operations.
#[derive(Debug)]
pub struct Group {
    id: ElementId,
    schema: Arc<GroupSchema>,
    children: Vec<Vec<MessageElement>>,
    context: Weak<MessageContext>,
    pub(crate) parent: Option<ParentRef>,
}

impl Group {
    /// A detached group with no message context.
    pub fn new(schema: Arc<GroupSchema>) -> Self {
        Self::attached(schema, Weak::new(), None)
    }

    pub(crate) fn attached(
        schema: Arc<GroupSchema>,
        context: Weak<MessageContext>,
        parent: Option<ParentRef>,
    ) -> Self {
        let children = std::iter::repeat_with(Vec::new).take(schema.len()).collect();
        Self {
            id: ElementId::next(),
            schema,
            children,
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

    pub fn schema(&self) -> &Arc<GroupSchema> {
        &self.schema
    }

    pub fn context(&self) -> Option<Arc<MessageContext>> {
        self.context.upgrade()
    }

    /// The group slot holding this group; `None` for a message root or a
    /// detached group.
    pub fn parent(&self) -> Option<&ParentRef> {
        self.parent.as_ref()
    }

    pub fn parent_slot(&self) -> Option<&SlotDescriptor> {
        self.parent().map(ParentRef::slot)
    }

    // === SCHEMA QUERIES ===

    /// Declared slots, always in declaration order.
    pub fn slots(&self) -> &[SlotDescriptor] {
        self.schema.slots()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schema.names()
    }

    pub fn slot<K: SlotKey>(&self, key: K) -> Result<&SlotDescriptor> {
        let id = key.resolve(&self.schema)?;
        Ok(&self.schema.slots()[id.index()])
    }

    pub fn slot_id<K: SlotKey>(&self, key: K) -> Result<SlotId> {
        key.resolve(&self.schema)
    }

    pub fn is_required<K: SlotKey>(&self, key: K) -> Result<bool> {
        Ok(self.slot(key)?.required)
    }

    pub fn is_repeating<K: SlotKey>(&self, key: K) -> Result<bool> {
        Ok(self.slot(key)?.repeating)
    }

    /// A blank instance for a slot, not stored in this group.
    pub fn create_blank<K: SlotKey>(&self, key: K) -> Result<MessageElement> {
        let slot = self.slot(key)?;
        let parent = ParentRef::new(self.id, &self.schema, slot.id());
        Ok(MessageElement::blank(&slot.element, &self.context, parent))
    }

    // === STRUCTURE ACCESS ===

    /// First instance of a slot, created if the slot is empty.
    pub fn get_structure<K: SlotKey>(&mut self, key: K) -> Result<&mut MessageElement> {
        self.get_structure_rep(key, 0)
    }

    /// Instance `rep` (zero-based) of a slot. `rep` equal to the current count
    /// appends a blank instance; anything further out fails with
    /// `RepetitionIndex`.
    pub fn get_structure_rep<K: SlotKey>(
        &mut self,
        key: K,
        rep: usize,
    ) -> Result<&mut MessageElement> {
        let index = key.resolve(&self.schema)?.index();
        let slot = &self.schema.slots()[index];
        let store = &mut self.children[index];

        if repetition::check_access(|| slot.name.clone(), slot.repeating, rep, store.len())? {
            tracing::trace!("Creating {}/{} repetition {}", self.schema.name(), slot.name, rep);
            let parent = ParentRef::new(self.id, &self.schema, slot.id());
            store.push(MessageElement::blank(&slot.element, &self.context, parent));
        }
        Ok(&mut store[rep])
    }

    /// Read-only lookup; never creates an instance.
    pub fn existing<K: SlotKey>(&self, key: K, rep: usize) -> Result<Option<&MessageElement>> {
        Ok(self.get_all(key)?.get(rep))
    }

    pub fn existing_mut<K: SlotKey>(
        &mut self,
        key: K,
        rep: usize,
    ) -> Result<Option<&mut MessageElement>> {
        let index = key.resolve(&self.schema)?.index();
        Ok(self.children[index].get_mut(rep))
    }

    pub fn repetitions_used<K: SlotKey>(&self, key: K) -> Result<usize> {
        Ok(self.get_all(key)?.len())
    }

    /// Every current instance of a slot, in index order.
    pub fn get_all<K: SlotKey>(&self, key: K) -> Result<&[MessageElement]> {
        let index = key.resolve(&self.schema)?.index();
        Ok(&self.children[index])
    }

    pub fn get_all_mut<K: SlotKey>(&mut self, key: K) -> Result<&mut [MessageElement]> {
        let index = key.resolve(&self.schema)?.index();
        Ok(&mut self.children[index])
    }

    /// Declared slots paired with their current instances, in declaration order.
    pub fn children(&self) -> impl Iterator<Item = (&SlotDescriptor, &[MessageElement])> {
        self.schema
            .slots()
            .iter()
            .zip(self.children.iter().map(Vec::as_slice))
    }

    // === REPETITION MANAGEMENT ===

    /// Append a brand-new instance and return it.
    pub fn add_structure<K: SlotKey>(&mut self, key: K) -> Result<&mut MessageElement> {
        let index = key.resolve(&self.schema)?.index();
        let slot = &self.schema.slots()[index];
        let store = &mut self.children[index];

        repetition::check_append(|| slot.name.clone(), slot.repeating, store.len())?;
        let parent = ParentRef::new(self.id, &self.schema, slot.id());
        store.push(MessageElement::blank(&slot.element, &self.context, parent));
        let last = store.len() - 1;
        Ok(&mut store[last])
    }

    /// Insert a blank instance at `index`; later instances shift up by one.
    pub fn insert_repetition<K: SlotKey>(
        &mut self,
        key: K,
        index: usize,
    ) -> Result<&mut MessageElement> {
        let slot_index = key.resolve(&self.schema)?.index();
        let slot = &self.schema.slots()[slot_index];
        let store = &mut self.children[slot_index];

        repetition::check_insert(|| slot.name.clone(), slot.repeating, index, store.len())?;
        let parent = ParentRef::new(self.id, &self.schema, slot.id());
        store.insert(index, MessageElement::blank(&slot.element, &self.context, parent));
        Ok(&mut store[index])
    }

    /// Remove a specific instance by identity. The removed element keeps its
    /// message context but no longer names a parent.
    pub fn remove_structure<K: SlotKey>(&mut self, key: K, id: ElementId) -> Result<MessageElement> {
        let index = key.resolve(&self.schema)?.index();
        let store = &mut self.children[index];

        match store.iter().position(|element| element.id() == id) {
            Some(position) => {
                let mut removed = store.remove(position);
                removed.detach_parent();
                Ok(removed)
            }
            None => Err(Hl7StructureError::InstanceNotFound {
                group: self.schema.name().to_string(),
                name: self.schema.slots()[index].name.clone(),
                id,
            }),
        }
    }

    /// Remove the instance at `index`; later instances shift down by one.
    pub fn remove_repetition_at<K: SlotKey>(
        &mut self,
        key: K,
        index: usize,
    ) -> Result<MessageElement> {
        let slot_index = key.resolve(&self.schema)?.index();
        let slot = &self.schema.slots()[slot_index];
        let store = &mut self.children[slot_index];

        repetition::check_existing(|| slot.name.clone(), index, store.len())?;
        let mut removed = store.remove(index);
        removed.detach_parent();
        Ok(removed)
    }

    // === TYPED ACCESS ===

    pub fn get_segment<K: SlotKey>(&mut self, key: K) -> Result<&mut Segment> {
        self.get_structure(key)?.as_segment_mut()
    }

    pub fn get_segment_rep<K: SlotKey>(&mut self, key: K, rep: usize) -> Result<&mut Segment> {
        self.get_structure_rep(key, rep)?.as_segment_mut()
    }

    pub fn get_group<K: SlotKey>(&mut self, key: K) -> Result<&mut Group> {
        self.get_structure(key)?.as_group_mut()
    }

    pub fn get_group_rep<K: SlotKey>(&mut self, key: K, rep: usize) -> Result<&mut Group> {
        self.get_structure_rep(key, rep)?.as_group_mut()
    }

    /// True when no field anywhere below this group holds a value.
    pub fn is_empty(&self) -> bool {
        self.children.iter().flatten().all(MessageElement::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldDescriptor, GroupSchemaBuilder, SegmentSchemaBuilder};

    fn schema() -> Arc<GroupSchema> {
        let a = SegmentSchemaBuilder::new("AAA")
            .field(FieldDescriptor::new("ST"))
            .build()
            .unwrap();
        let b = SegmentSchemaBuilder::new("BBB")
            .field(FieldDescriptor::new("ST"))
            .build()
            .unwrap();
        GroupSchemaBuilder::new("G")
            .segment(a, true, false)
            .segment(b, false, true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_get_structure_creates_once() {
        let mut group = Group::new(schema());
        assert_eq!(group.repetitions_used("AAA").unwrap(), 0);

        let first = group.get_structure("AAA").unwrap().id();
        let again = group.get_structure("AAA").unwrap().id();
        assert_eq!(first, again);
        assert_eq!(group.repetitions_used("AAA").unwrap(), 1);
    }

    #[test]
    fn test_slot_id_and_name_address_same_store() {
        let mut group = Group::new(schema());
        let id = group.slot_id("BBB").unwrap();
        assert_eq!(id, SlotId(1));

        let added = group.add_structure(id).unwrap().id();
        assert_eq!(group.get_all("BBB").unwrap()[0].id(), added);
        assert!(group.get_structure(SlotId(2)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove_structure_by_identity() {
        let mut group = Group::new(schema());
        let keep = group.add_structure("BBB").unwrap().id();
        let dropped = group.add_structure("BBB").unwrap().id();

        let removed = group.remove_structure("BBB", dropped).unwrap();
        assert_eq!(removed.id(), dropped);
        assert_eq!(group.get_all("BBB").unwrap()[0].id(), keep);

        let err = group.remove_structure("BBB", dropped).unwrap_err();
        assert!(matches!(err, Hl7StructureError::InstanceNotFound { .. }));
        let err = group.remove_structure("AAA", keep).unwrap_err();
        assert!(matches!(err, Hl7StructureError::InstanceNotFound { .. }));
    }

    #[test]
    fn test_insert_repetition_shifts_up() {
        let mut group = Group::new(schema());
        let first = group.add_structure("BBB").unwrap().id();
        let inserted = group.insert_repetition("BBB", 0).unwrap().id();

        let ids: Vec<_> = group.get_all("BBB").unwrap().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![inserted, first]);
        assert!(group.insert_repetition("BBB", 5).is_err());
    }

    #[test]
    fn test_typed_access_mismatch() {
        let mut group = Group::new(schema());
        let err = group.get_group("AAA").unwrap_err();
        assert!(matches!(err, Hl7StructureError::TypeMismatch { .. }));
    }
}

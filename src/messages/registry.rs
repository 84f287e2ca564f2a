use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

use super::structures::ALL_STRUCTURES;
use super::tables::{ElementDef, GroupDef, SegmentDef};
use crate::config::{DeclarationPolicy, StructureConfig};
use crate::error::{Hl7StructureError, Result};
use crate::structure::Message;
use crate::types::{ElementSchema, GroupSchema, GroupSchemaBuilder, SegmentSchema, SegmentSchemaBuilder};

static STANDARD: OnceCell<SchemaRegistry> = OnceCell::new();

/// Named segment and group schemas, shared by every message built from them.
///
/// Each segment type and each group type is declared once; every slot that
/// refers to it holds the same `Arc`.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    policy: DeclarationPolicy,
    segments: HashMap<String, Arc<SegmentSchema>>,
    groups: HashMap<String, Arc<GroupSchema>>,
    structures: HashMap<String, Arc<GroupSchema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DeclarationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// An empty registry declaring schemas under `config`'s declaration policy.
    pub fn for_config(config: &StructureConfig) -> Self {
        Self::with_policy(config.declaration_policy)
    }

    /// The built-in v2.5 registry, declared on first use.
    pub fn standard() -> Result<&'static SchemaRegistry> {
        STANDARD.get_or_try_init(|| {
            let mut registry = SchemaRegistry::new();
            for def in ALL_STRUCTURES {
                registry.register_structure_def(def)?;
            }
            tracing::info!(
                "Loaded {} standard message structures ({} segment types)",
                registry.structures.len(),
                registry.segments.len()
            );
            Ok(registry)
        })
    }

    pub fn register_segment_def(&mut self, def: &SegmentDef) -> Result<Arc<SegmentSchema>> {
        if let Some(schema) = self.segments.get(def.name) {
            return Ok(Arc::clone(schema));
        }

        let schema = def
            .fields
            .iter()
            .fold(
                SegmentSchemaBuilder::new(def.name)
                    .with_policy(self.policy)
                    .with_description(def.description),
                |builder, field| builder.field(field.descriptor()),
            )
            .build()?;
        self.segments.insert(def.name.to_string(), Arc::clone(&schema));
        Ok(schema)
    }

    /// Declare a group type and, recursively, every type it refers to.
    pub fn register_group_def(&mut self, def: &GroupDef) -> Result<Arc<GroupSchema>> {
        if let Some(schema) = self.groups.get(def.name) {
            return Ok(Arc::clone(schema));
        }

        let mut builder = GroupSchemaBuilder::new(def.name).with_policy(self.policy);
        for slot in def.slots {
            let element = match slot.element {
                ElementDef::Segment(segment) => ElementSchema::Segment(self.register_segment_def(segment)?),
                ElementDef::Group(group) => ElementSchema::Group(self.register_group_def(group)?),
            };
            builder = builder.declare(slot.name, element, slot.required, slot.repeating);
        }

        let schema = builder.build()?;
        self.groups.insert(def.name.to_string(), Arc::clone(&schema));
        Ok(schema)
    }

    /// Declare a group type and expose it as a top-level message structure.
    pub fn register_structure_def(&mut self, def: &GroupDef) -> Result<Arc<GroupSchema>> {
        let schema = self.register_group_def(def)?;
        self.register_structure(Arc::clone(&schema));
        Ok(schema)
    }

    /// Expose an already-declared schema as a message structure, replacing any
    /// previous structure of the same name.
    pub fn register_structure(&mut self, schema: Arc<GroupSchema>) {
        if self
            .structures
            .insert(schema.name().to_string(), Arc::clone(&schema))
            .is_some()
        {
            tracing::debug!("Replaced message structure {}", schema.name());
        }
    }

    /// Register a message structure from its JSON form.
    ///
    /// Every nested group and segment type is registered as well. A type
    /// already known under the same name is reused when identical and
    /// rejected when it differs.
    pub fn register_json(&mut self, json: &str) -> Result<Arc<GroupSchema>> {
        let parsed: GroupSchema = serde_json::from_str(json)?;
        let schema = self.intern_group(&parsed)?;
        self.register_structure(Arc::clone(&schema));
        Ok(schema)
    }

    fn intern_segment(&mut self, schema: &Arc<SegmentSchema>) -> Result<Arc<SegmentSchema>> {
        match self.segments.get(schema.name()) {
            Some(existing) if existing == schema => Ok(Arc::clone(existing)),
            Some(_) => Err(conflict(schema.name())),
            None => {
                self.segments
                    .insert(schema.name().to_string(), Arc::clone(schema));
                Ok(Arc::clone(schema))
            }
        }
    }

    fn intern_group(&mut self, schema: &GroupSchema) -> Result<Arc<GroupSchema>> {
        if let Some(existing) = self.groups.get(schema.name()) {
            return if **existing == *schema {
                Ok(Arc::clone(existing))
            } else {
                Err(conflict(schema.name()))
            };
        }

        let mut builder = GroupSchemaBuilder::new(schema.name()).with_policy(self.policy);
        for slot in schema.slots() {
            let element = match &slot.element {
                ElementSchema::Segment(segment) => ElementSchema::Segment(self.intern_segment(segment)?),
                ElementSchema::Group(group) => ElementSchema::Group(self.intern_group(group)?),
            };
            builder = builder.declare(Some(slot.name.as_str()), element, slot.required, slot.repeating);
        }

        let interned = builder.build()?;
        self.groups
            .insert(schema.name().to_string(), Arc::clone(&interned));
        Ok(interned)
    }

    pub fn segment(&self, name: &str) -> Option<Arc<SegmentSchema>> {
        self.segments.get(name).cloned()
    }

    pub fn group(&self, name: &str) -> Option<Arc<GroupSchema>> {
        self.groups.get(name).cloned()
    }

    pub fn structure(&self, name: &str) -> Option<Arc<GroupSchema>> {
        self.structures.get(name).cloned()
    }

    /// Registered message structure names, sorted.
    pub fn structure_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.structures.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// A new, empty message of the named structure.
    pub fn new_message(&self, name: &str, config: StructureConfig) -> Result<Message> {
        let schema = self
            .structure(name)
            .ok_or_else(|| Hl7StructureError::UnknownStructure {
                name: name.to_string(),
            })?;
        Ok(Message::new(schema, config))
    }
}

fn conflict(name: &str) -> Hl7StructureError {
    Hl7StructureError::declaration(name, "conflicts with the registered definition of that name")
}

impl Message {
    /// A new message of a built-in structure such as `ADT_A01`.
    ///
    /// The built-in tables are always declared strictly; `config`'s
    /// declaration policy only applies to registries made with
    /// [`SchemaRegistry::for_config`].
    pub fn from_registry(name: &str, config: StructureConfig) -> Result<Self> {
        SchemaRegistry::standard()?.new_message(name, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::segments::ALL_SEGMENTS;
    use crate::messages::structures::{ADT_A01, ORU_R01};

    #[test]
    fn test_standard_registry_loads() {
        let registry = SchemaRegistry::standard().unwrap();
        assert_eq!(registry.structure_names(), vec!["ACK", "ADT_A01", "ORU_R01"]);
        assert_eq!(registry.segment("PID").unwrap().field_count(), 39);
    }

    #[test]
    fn test_every_segment_table_declares() {
        let mut registry = SchemaRegistry::new();
        for def in ALL_SEGMENTS {
            let schema = registry.register_segment_def(def).unwrap();
            assert_eq!(schema.field_count(), def.fields.len());
            assert!(schema.fields().iter().all(|field| field.max_length > 0));
        }
    }

    #[test]
    fn test_lenient_registry_uses_config_policy() {
        let config = StructureConfig::default().with_declaration_policy(DeclarationPolicy::Lenient);
        let registry = SchemaRegistry::for_config(&config);
        assert_eq!(registry.policy, DeclarationPolicy::Lenient);
    }

    #[test]
    fn test_segment_types_are_shared() {
        let mut registry = SchemaRegistry::new();
        let adt = registry.register_structure_def(&ADT_A01).unwrap();
        let oru = registry.register_structure_def(&ORU_R01).unwrap();

        let adt_msh = adt.slot_by_name("MSH").unwrap();
        let oru_msh = oru.slot_by_name("MSH").unwrap();
        match (&adt_msh.element, &oru_msh.element) {
            (ElementSchema::Segment(a), ElementSchema::Segment(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("MSH should be a segment slot"),
        }
    }

    #[test]
    fn test_repeated_segment_type_gets_suffixed_name() {
        let mut registry = SchemaRegistry::new();
        let adt = registry.register_structure_def(&ADT_A01).unwrap();

        let rol = adt.resolve("ROL").unwrap();
        let rol2 = adt.resolve("ROL2").unwrap();
        assert!(rol < rol2);
        assert_eq!(adt.slot(rol2).unwrap().element_type(), "ROL");
    }

    #[test]
    fn test_from_registry_keeps_caller_config() {
        let config = StructureConfig::default().with_declaration_policy(DeclarationPolicy::Lenient);
        let message = Message::from_registry("ACK", config.clone()).unwrap();
        assert_eq!(message.context().config(), &config);
    }

    #[test]
    fn test_unknown_structure() {
        let err = Message::from_registry("ZZZ_Z99", StructureConfig::default()).unwrap_err();
        assert!(matches!(err, Hl7StructureError::UnknownStructure { .. }));
        assert!(err.is_not_found());
    }
}

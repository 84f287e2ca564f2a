pub mod field;
pub mod resolver;
pub mod schema;
pub mod slot;

pub use field::{FieldDescriptor, FieldValue};
pub use resolver::NameIndexResolver;
pub use schema::{GroupSchema, GroupSchemaBuilder, SegmentSchema, SegmentSchemaBuilder};
pub use slot::{ElementKind, ElementSchema, SlotDescriptor, SlotId};

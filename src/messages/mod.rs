//! Built-in HL7 v2.5 schemas: segment layouts, message structures, the
//! registry that declares them and typed wrappers over the result.

pub mod registry;
pub mod segments;
pub mod structures;
pub mod tables;
pub mod typed;

pub use registry::SchemaRegistry;
pub use tables::{ElementDef, FieldDef, GroupDef, SegmentDef, SlotDef};
pub use typed::{
    Ack, AdtA01, AdtA01Insurance, AdtA01Procedure, GroupView, OruR01, OruR01Observation,
    OruR01OrderObservation, OruR01Patient, OruR01PatientResult, OruR01TimingQty, OruR01Visit,
};

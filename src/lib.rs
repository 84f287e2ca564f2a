//! # HL7 v2 Structure
//!
//! Schema-driven composite structure model for HL7 v2 messages.
//!
//! A message is a tree: groups hold named slots in a fixed order, each slot
//! holds zero or more segments or nested groups, and segments hold
//! positional, repeatable field values. Schemas describe the shape; the tree
//! is built lazily as elements are requested.
//!
//! ## Features
//!
//! - **Fixed slot order**: slots are declared once and addressed by name or position
//! - **Lazy creation**: the first instance of a slot appears on first access
//! - **Repetition rules**: contiguous, zero-based repetitions for slots and fields
//! - **Standard structures**: ADT_A01, ORU_R01 and ACK from HL7 v2.5 (`standard-schemas`)
//!
//! ## Quick Start
//!
//! ```rust
//! use hl7v2_structure::*;
//!
//! # fn example() -> Result<()> {
//! let mut message = Message::from_registry("ORU_R01", StructureConfig::default())?;
//!
//! let obr = message
//!     .structure_at("PATIENT_RESULT(0)/ORDER_OBSERVATION(0)/OBR")?
//!     .as_segment_mut()?;
//! obr.set_field(4, 0, "CBC^Complete Blood Count")?;
//!
//! assert_eq!(message.repetitions_used("PATIENT_RESULT")?, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
#[cfg(feature = "standard-schemas")]
pub mod messages;
pub mod structure;
pub mod types;
pub mod validation;

pub use config::{DeclarationPolicy, Hl7Version, StructureConfig};
pub use error::Result; // Our Result type takes precedence
pub use error::Hl7StructureError;
#[cfg(feature = "standard-schemas")]
pub use messages::{GroupView, SchemaRegistry};
pub use structure::{
    ElementId, Group, Message, MessageContext, MessageElement, ParentRef, PathComponent, Segment,
    SlotKey, parse_path,
};
pub use types::{
    ElementKind, ElementSchema, FieldDescriptor, FieldValue, GroupSchema, GroupSchemaBuilder,
    NameIndexResolver, SegmentSchema, SegmentSchemaBuilder, SlotDescriptor, SlotId,
};
pub use validation::{IssueKind, StructureIssue};

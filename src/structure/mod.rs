pub mod element;
pub mod group;
pub mod message;
pub mod path;
mod repetition;
pub mod segment;

pub use element::{ElementId, MessageElement, ParentRef};
pub use group::{Group, SlotKey};
pub use message::{Message, MessageContext};
pub use path::{PathComponent, parse_path};
pub use segment::Segment;

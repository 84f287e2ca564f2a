use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use super::group::Group;
use crate::config::{Hl7Version, StructureConfig};
use crate::types::GroupSchema;
use crate::validation::{self, StructureIssue};

/// State shared by every element of one message tree.
///
/// Elements reach it through a weak reference; only the owning [`Message`]
/// keeps it alive.
#[derive(Debug)]
pub struct MessageContext {
    structure: String,
    config: StructureConfig,
}

impl MessageContext {
    /// Message structure name, e.g. `ADT_A01`.
    pub fn structure(&self) -> &str {
        &self.structure
    }

    pub fn version(&self) -> Hl7Version {
        self.config.version
    }

    pub fn config(&self) -> &StructureConfig {
        &self.config
    }
}

/// Root of a structure tree. Owns the root group and the shared context;
/// dropping the message drops the whole tree.
#[derive(Debug)]
pub struct Message {
    context: Arc<MessageContext>,
    root: Group,
}

impl Message {
    pub fn new(schema: Arc<GroupSchema>, config: StructureConfig) -> Self {
        let context = Arc::new(MessageContext {
            structure: schema.name().to_string(),
            config,
        });
        let root = Group::attached(schema, Arc::downgrade(&context), None);

        tracing::debug!(
            "Created {} message (HL7 {})",
            context.structure,
            context.version()
        );
        Self { context, root }
    }

    pub fn context(&self) -> &Arc<MessageContext> {
        &self.context
    }

    pub fn version(&self) -> Hl7Version {
        self.context.version()
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Group {
        &mut self.root
    }

    /// Advisory completeness report; never blocks construction.
    pub fn check_completeness(&self) -> Vec<StructureIssue> {
        validation::check_group(&self.root, &self.context.config)
    }
}

impl Deref for Message {
    type Target = Group;

    fn deref(&self) -> &Group {
        &self.root
    }
}

impl DerefMut for Message {
    fn deref_mut(&mut self) -> &mut Group {
        &mut self.root
    }
}

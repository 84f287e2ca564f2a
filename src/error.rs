use thiserror::Error;

use crate::structure::ElementId;
use crate::types::ElementKind;

#[derive(Error, Debug)]
pub enum Hl7StructureError {
    #[error("Schema declaration error in {schema}: {message}")]
    SchemaDeclaration { schema: String, message: String },

    #[error("Structure '{name}' is not declared in group {group}")]
    StructureNotFound { group: String, name: String },

    #[error("Instance {id} is not a repetition of '{name}' in group {group}")]
    InstanceNotFound {
        group: String,
        name: String,
        id: ElementId,
    },

    #[error("Field {position} is not declared in segment {segment}")]
    FieldNotFound { segment: String, position: usize },

    #[error("Repetition {requested} of '{name}' is out of range ({used} in use)")]
    RepetitionIndex {
        name: String,
        requested: usize,
        used: usize,
    },

    #[error("'{name}' is non-repeating and already has an instance")]
    RepetitionNotAllowed { name: String },

    #[error("'{name}' holds a {found}, not a {expected}")]
    TypeMismatch {
        name: String,
        expected: ElementKind,
        found: ElementKind,
    },

    #[error("No message structure named '{name}' is registered")]
    UnknownStructure { name: String },

    #[error("Invalid structure path '{path}': {message}")]
    InvalidPath { path: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Hl7StructureError {
    pub fn declaration(schema: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaDeclaration {
            schema: schema.into(),
            message: message.into(),
        }
    }

    pub fn invalid_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for every flavour of "the requested name, position or instance does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StructureNotFound { .. }
                | Self::InstanceNotFound { .. }
                | Self::FieldNotFound { .. }
                | Self::UnknownStructure { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Hl7StructureError>;

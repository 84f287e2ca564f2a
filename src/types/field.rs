use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared metadata for one field of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// One-based field number (PID-3 has position 3).
    #[serde(default)]
    pub position: usize,
    pub required: bool,
    pub repeating: bool,
    /// Maximum encoded length; zero when the table leaves it unspecified.
    #[serde(rename = "maxLength", default)]
    pub max_length: u32,
    pub datatype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldDescriptor {
    pub fn new(datatype: impl Into<String>) -> Self {
        Self {
            position: 0,
            required: false,
            repeating: false,
            max_length: 0,
            datatype: datatype.into(),
            description: None,
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_repeating(mut self, repeating: bool) -> Self {
        self.repeating = repeating;
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when `value` fits the declared max length (always true if unspecified).
    pub fn accepts_length(&self, value: &str) -> bool {
        self.max_length == 0 || value.chars().count() <= self.max_length as usize
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.datatype)?;
        if let Some(description) = &self.description {
            write!(f, " ({description})")?;
        }
        Ok(())
    }
}

/// One stored repetition of a field, kept as raw encoded text.
///
/// Component and sub-component structure belong to the datatype layer, which
/// reads and writes this text; the structure model only owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue {
    raw: String,
}

impl FieldValue {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn set(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FieldValue {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for FieldValue {
    fn from(raw: String) -> Self {
        Self { raw }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_check() {
        let field = FieldDescriptor::new("ST").with_max_length(3);
        assert!(field.accepts_length("ABC"));
        assert!(!field.accepts_length("ABCD"));

        let unbounded = FieldDescriptor::new("TX");
        assert!(unbounded.accepts_length(&"x".repeat(10_000)));
    }

    #[test]
    fn test_field_value_edit() {
        let mut value = FieldValue::default();
        assert!(value.is_empty());
        value.set("DOE^JOHN");
        assert_eq!(value.as_str(), "DOE^JOHN");
        assert_eq!(value.to_string(), "DOE^JOHN");
        value.clear();
        assert!(value.is_empty());
    }
}

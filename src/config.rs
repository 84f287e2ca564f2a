use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureConfig {
    pub version: Hl7Version,
    #[serde(default)]
    pub declaration_policy: DeclarationPolicy,
    #[serde(default = "default_check_field_lengths")]
    pub check_field_lengths: bool,
}

/// What a schema builder does with an invalid slot or field declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationPolicy {
    /// Fail the whole declaration.
    #[default]
    #[serde(rename = "strict")]
    Strict,
    /// Log the bad declaration and keep going with a partial schema.
    #[serde(rename = "lenient")]
    Lenient,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hl7Version {
    #[serde(rename = "2.1")]
    V21,
    #[serde(rename = "2.2")]
    V22,
    #[serde(rename = "2.3")]
    V23,
    #[serde(rename = "2.3.1")]
    V231,
    #[serde(rename = "2.4")]
    V24,
    #[serde(rename = "2.5")]
    V25,
    #[serde(rename = "2.5.1")]
    V251,
    #[serde(rename = "2.6")]
    V26,
    #[serde(rename = "2.7")]
    V27,
    #[serde(rename = "2.7.1")]
    V271,
    #[serde(rename = "2.8")]
    V28,
    #[serde(rename = "2.8.1")]
    V281,
}

fn default_check_field_lengths() -> bool {
    true
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            version: Hl7Version::V25,
            declaration_policy: DeclarationPolicy::Strict,
            check_field_lengths: true,
        }
    }
}

impl StructureConfig {
    pub fn for_version(version: Hl7Version) -> Self {
        Self {
            version,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_declaration_policy(mut self, policy: DeclarationPolicy) -> Self {
        self.declaration_policy = policy;
        self
    }

    pub fn with_field_length_checks(mut self, enabled: bool) -> Self {
        self.check_field_lengths = enabled;
        self
    }
}

impl Hl7Version {
    /// Get all known HL7 v2 versions, oldest first
    pub fn all() -> &'static [Hl7Version] {
        &[
            Hl7Version::V21,
            Hl7Version::V22,
            Hl7Version::V23,
            Hl7Version::V231,
            Hl7Version::V24,
            Hl7Version::V25,
            Hl7Version::V251,
            Hl7Version::V26,
            Hl7Version::V27,
            Hl7Version::V271,
            Hl7Version::V28,
            Hl7Version::V281,
        ]
    }

    /// The version string as it appears in MSH-12
    pub fn as_str(&self) -> &'static str {
        match self {
            Hl7Version::V21 => "2.1",
            Hl7Version::V22 => "2.2",
            Hl7Version::V23 => "2.3",
            Hl7Version::V231 => "2.3.1",
            Hl7Version::V24 => "2.4",
            Hl7Version::V25 => "2.5",
            Hl7Version::V251 => "2.5.1",
            Hl7Version::V26 => "2.6",
            Hl7Version::V27 => "2.7",
            Hl7Version::V271 => "2.7.1",
            Hl7Version::V28 => "2.8",
            Hl7Version::V281 => "2.8.1",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim().trim_start_matches(['v', 'V']);
        Self::all()
            .iter()
            .copied()
            .find(|version| version.as_str() == trimmed)
    }
}

impl fmt::Display for Hl7Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hl7Version {
    type Err = &'static str;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or("Invalid HL7 version")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        assert_eq!("2.5".parse::<Hl7Version>(), Ok(Hl7Version::V25));
        assert_eq!(Hl7Version::parse("v2.3.1"), Some(Hl7Version::V231));
        assert_eq!(Hl7Version::parse("3.0"), None);
        assert_eq!(Hl7Version::V281.to_string(), "2.8.1");
        assert!(Hl7Version::V24 < Hl7Version::V25);
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config = StructureConfig::from_json(r#"{"version": "2.4"}"#).unwrap();
        assert_eq!(config.version, Hl7Version::V24);
        assert_eq!(config.declaration_policy, DeclarationPolicy::Strict);
        assert!(config.check_field_lengths);

        let lenient =
            StructureConfig::from_json(r#"{"version": "2.5.1", "declaration_policy": "lenient"}"#)
                .unwrap();
        assert_eq!(lenient.declaration_policy, DeclarationPolicy::Lenient);
    }

    #[test]
    fn test_config_rejects_unknown_version() {
        assert!(StructureConfig::from_json(r#"{"version": "9.9"}"#).is_err());
    }
}

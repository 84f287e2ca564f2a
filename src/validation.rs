//! Advisory completeness checks over a structure tree.
//!
//! Construction is never constrained by cardinality: a required slot may stay
//! empty while a tree is being built. These checks report what an encoder
//! would find missing once the tree is considered complete.

use serde::Serialize;
use std::fmt;

use crate::config::StructureConfig;
use crate::structure::{Group, MessageElement, Segment};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureIssue {
    /// Structure path of the offending slot or segment, e.g. `ORU_R01/PATIENT_RESULT(0)/OBX`.
    pub path: String,
    pub kind: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    MissingRequiredSlot,
    MissingRequiredField { position: usize },
    ValueTooLong {
        position: usize,
        rep: usize,
        max_length: u32,
        actual: usize,
    },
}

impl fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::MissingRequiredSlot => write!(f, "{}: required structure missing", self.path),
            IssueKind::MissingRequiredField { position } => {
                write!(f, "{}-{}: required field empty", self.path, position)
            }
            IssueKind::ValueTooLong {
                position,
                rep,
                max_length,
                actual,
            } => write!(
                f,
                "{}-{}({}): {} characters exceeds max length {}",
                self.path, position, rep, actual, max_length
            ),
        }
    }
}

pub fn check_group(group: &Group, config: &StructureConfig) -> Vec<StructureIssue> {
    let mut issues = Vec::new();
    walk_group(group, group.name(), config, &mut issues);
    issues
}

pub fn check_segment(segment: &Segment, config: &StructureConfig) -> Vec<StructureIssue> {
    let mut issues = Vec::new();
    walk_segment(segment, segment.name(), config, &mut issues);
    issues
}

fn walk_group(group: &Group, path: &str, config: &StructureConfig, issues: &mut Vec<StructureIssue>) {
    for (slot, instances) in group.children() {
        if slot.required && instances.is_empty() {
            issues.push(StructureIssue {
                path: format!("{path}/{}", slot.name),
                kind: IssueKind::MissingRequiredSlot,
            });
            continue;
        }

        for (rep, element) in instances.iter().enumerate() {
            let child_path = if slot.repeating {
                format!("{path}/{}({rep})", slot.name)
            } else {
                format!("{path}/{}", slot.name)
            };
            match element {
                MessageElement::Segment(segment) => walk_segment(segment, &child_path, config, issues),
                MessageElement::Group(child) => walk_group(child, &child_path, config, issues),
            }
        }
    }
}

fn walk_segment(
    segment: &Segment,
    path: &str,
    config: &StructureConfig,
    issues: &mut Vec<StructureIssue>,
) {
    for descriptor in segment.descriptors() {
        let values = segment.fields(descriptor.position).unwrap_or_default();

        if descriptor.required && values.iter().all(|value| value.is_empty()) {
            issues.push(StructureIssue {
                path: path.to_string(),
                kind: IssueKind::MissingRequiredField {
                    position: descriptor.position,
                },
            });
        }

        if config.check_field_lengths {
            for (rep, value) in values.iter().enumerate() {
                if !descriptor.accepts_length(value.as_str()) {
                    issues.push(StructureIssue {
                        path: path.to_string(),
                        kind: IssueKind::ValueTooLong {
                            position: descriptor.position,
                            rep,
                            max_length: descriptor.max_length,
                            actual: value.as_str().chars().count(),
                        },
                    });
                }
            }
        }
    }
}

// Slash-separated structure paths: `PATIENT_RESULT(0)/ORDER_OBSERVATION(1)/OBX`

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::element::MessageElement;
use super::group::Group;
use crate::error::{Hl7StructureError, Result};

static COMPONENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][A-Z0-9_]*)(?:\((\d+)\))?$").expect("path component pattern"));

/// One step of a structure path: a slot name and a zero-based repetition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathComponent {
    pub name: String,
    pub rep: usize,
}

impl fmt::Display for PathComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.rep)
    }
}

pub fn parse_path(path: &str) -> Result<Vec<PathComponent>> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Err(Hl7StructureError::invalid_path(path, "path is empty"));
    }

    trimmed
        .split('/')
        .map(|component| {
            let captures = COMPONENT.captures(component).ok_or_else(|| {
                Hl7StructureError::invalid_path(path, format!("malformed component '{component}'"))
            })?;
            let rep = match captures.get(2) {
                Some(digits) => digits.as_str().parse::<usize>().map_err(|_| {
                    Hl7StructureError::invalid_path(path, format!("bad repetition in '{component}'"))
                })?,
                None => 0,
            };
            Ok(PathComponent {
                name: captures[1].to_string(),
                rep,
            })
        })
        .collect()
}

impl Group {
    /// Walk `path`, creating missing instances along the way under the same
    /// rules as [`Group::get_structure_rep`].
    pub fn structure_at(&mut self, path: &str) -> Result<&mut MessageElement> {
        let components = parse_path(path)?;
        let Some((last, parents)) = components.split_last() else {
            return Err(Hl7StructureError::invalid_path(path, "path is empty"));
        };

        let mut group = self;
        for component in parents {
            group = group.get_group_rep(component.name.as_str(), component.rep)?;
        }
        group.get_structure_rep(last.name.as_str(), last.rep)
    }

    /// Walk `path` without creating anything. `Ok(None)` when some instance
    /// along the way does not exist yet.
    pub fn find(&self, path: &str) -> Result<Option<&MessageElement>> {
        let components = parse_path(path)?;
        let Some((last, parents)) = components.split_last() else {
            return Err(Hl7StructureError::invalid_path(path, "path is empty"));
        };

        let mut group = self;
        for component in parents {
            match group.existing(component.name.as_str(), component.rep)? {
                Some(element) => group = element.as_group()?,
                None => return Ok(None),
            }
        }
        group.existing(last.name.as_str(), last.rep)
    }
}

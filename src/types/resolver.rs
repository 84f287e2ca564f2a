use std::collections::HashMap;

use super::slot::SlotId;

/// Maps slot names to their declared positions.
///
/// Names are assigned once, while a group schema is being declared. A slot
/// declared without an explicit name takes its element type name; later
/// slots of the same type get a numeric suffix starting at 2 (`ROL`, `ROL2`,
/// `ROL3`, ...). Lookups afterwards are plain map hits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndexResolver {
    index: HashMap<String, SlotId>,
}

impl NameIndexResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, name: &str) -> Option<SlotId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// First free name derived from `type_name`.
    pub fn disambiguate(&self, type_name: &str) -> String {
        if !self.contains(type_name) {
            return type_name.to_string();
        }

        let mut suffix = 2usize;
        loop {
            let candidate = format!("{type_name}{suffix}");
            if !self.contains(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    /// Register `name` for `id`. Returns `false` (and changes nothing) on collision.
    pub fn register(&mut self, name: &str, id: SlotId) -> bool {
        if self.contains(name) {
            return false;
        }
        self.index.insert(name.to_string(), id);
        true
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

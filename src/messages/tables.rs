// Static schema tables: message and segment layouts as plain data

use crate::types::FieldDescriptor;

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub datatype: &'static str,
    pub max_length: u32,
    pub required: bool,
    pub repeating: bool,
    pub description: &'static str,
}

impl FieldDef {
    pub const fn new(datatype: &'static str, max_length: u32, description: &'static str) -> Self {
        Self {
            datatype,
            max_length,
            required: false,
            repeating: false,
            description,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn repeating(mut self) -> Self {
        self.repeating = true;
        self
    }

    pub fn descriptor(&self) -> FieldDescriptor {
        FieldDescriptor::new(self.datatype)
            .with_required(self.required)
            .with_repeating(self.repeating)
            .with_max_length(self.max_length)
            .with_description(self.description)
    }
}

#[derive(Debug)]
pub struct SegmentDef {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldDef],
}

#[derive(Debug, Clone, Copy)]
pub enum ElementDef {
    Segment(&'static SegmentDef),
    Group(&'static GroupDef),
}

#[derive(Debug, Clone, Copy)]
pub struct SlotDef {
    /// Explicit slot name; `None` names the slot after its segment type.
    pub name: Option<&'static str>,
    pub element: ElementDef,
    pub required: bool,
    pub repeating: bool,
}

impl SlotDef {
    pub const fn segment(def: &'static SegmentDef) -> Self {
        Self {
            name: None,
            element: ElementDef::Segment(def),
            required: false,
            repeating: false,
        }
    }

    pub const fn group(name: &'static str, def: &'static GroupDef) -> Self {
        Self {
            name: Some(name),
            element: ElementDef::Group(def),
            required: false,
            repeating: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn repeating(mut self) -> Self {
        self.repeating = true;
        self
    }
}

#[derive(Debug)]
pub struct GroupDef {
    pub name: &'static str,
    pub slots: &'static [SlotDef],
}

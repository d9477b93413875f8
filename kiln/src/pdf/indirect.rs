use std::fmt::Display;

use super::Object;

/// A top level object together with the number it is addressed by.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    pub reference: Reference,
    pub object: Object,
}

impl IndirectObject {
    pub fn new(reference: Reference, object: impl Into<Object>) -> Self {
        Self {
            reference,
            object: object.into(),
        }
    }
}

/// Object number and generation of an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reference {
    pub number: u32,
    pub generation: u16,
}

impl Reference {
    pub const fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

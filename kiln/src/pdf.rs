use std::ops::Deref;

use indexmap::IndexMap;

pub use self::{
    array::Array,
    indirect::{IndirectObject, Reference},
    name::Name,
    stream::Stream,
    string::{HexString, LiteralString},
    trailer::{Trailer, TrailerInfo},
    xref::{build_subsections, FreeObject, UsedCompressedObject, UsedObject, Xref, XrefEntry, XrefSubsection},
};

mod array;
mod indirect;
mod name;
mod stream;
mod string;
pub mod trailer;
pub mod xref;

pub(crate) const K_LENGTH: &[u8] = b"Length";

/// Dictionaries keep their insertion order, it determines the encoded bytes.
pub type Dictionary = IndexMap<Name, Object>;

/// Every value that can be written into a PDF body.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Raw comment payload, written after a `%`.
    Comment(Bytes),
    Null,
    Bool(bool),
    Name(Name),
    String(LiteralString),
    HexString(HexString),
    Reference(Reference),
    Integer(i64),
    Real(f64),
    Array(Array),
    Dictionary(Dictionary),
    Stream(Stream),
}

impl Object {
    /// Short lowercase name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Comment(_) => "comment",
            Object::Null => "null",
            Object::Bool(_) => "boolean",
            Object::Name(_) => "name",
            Object::String(_) => "string",
            Object::HexString(_) => "hex string",
            Object::Reference(_) => "reference",
            Object::Integer(_) => "integer",
            Object::Real(_) => "real",
            Object::Array(_) => "array",
            Object::Dictionary(_) => "dictionary",
            Object::Stream(_) => "stream",
        }
    }

    pub fn integer(&self) -> Option<i64> {
        if let Object::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Object {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<f64> for Object {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<LiteralString> for Object {
    fn from(v: LiteralString) -> Self {
        Self::String(v)
    }
}

impl From<HexString> for Object {
    fn from(v: HexString) -> Self {
        Self::HexString(v)
    }
}

impl From<Name> for Object {
    fn from(n: Name) -> Self {
        Self::Name(n)
    }
}

impl From<Reference> for Object {
    fn from(r: Reference) -> Self {
        Self::Reference(r)
    }
}

impl From<Vec<Object>> for Object {
    fn from(a: Vec<Object>) -> Self {
        Self::Array(a.into())
    }
}

impl From<Array> for Object {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Self::Dictionary(d)
    }
}

impl From<Stream> for Object {
    fn from(s: Stream) -> Self {
        Self::Stream(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Bytes(v)
    }
}

impl From<&[u8]> for Bytes {
    fn from(v: &[u8]) -> Self {
        Bytes(v.to_vec())
    }
}

impl Deref for Bytes {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

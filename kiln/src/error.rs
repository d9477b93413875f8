use thiserror::Error;

use crate::pdf::Reference;

/// Values that can't be turned into valid PDF bytes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("{kind} can't be nested inside an array or dictionary")]
    Unserializable { kind: &'static str },

    #[error("object {number} has a compressed xref entry, xref tables only hold free and in-use entries")]
    UnsupportedXrefEntry { number: u32 },

    #[error("byte offset {offset} of object {number} doesn't fit into 10 digits")]
    OffsetOverflow { number: u32, offset: usize },

    #[error("real number {0} has no PDF representation")]
    NonFiniteReal(f64),

    #[error("real number {0} is too large for PDF readers")]
    RealOutOfRange(f64),

    #[error("object number {0} has more than one xref entry")]
    DuplicateObjectNumber(u32),
}

#[derive(Error, Debug)]
pub enum KilnError {
    #[error("failed to write object {reference}")]
    Object {
        reference: Reference,
        #[source]
        source: EncodeError,
    },

    #[error("failed to write xref table")]
    Xref(#[source] EncodeError),

    #[error("failed to write trailer")]
    Trailer(#[source] EncodeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

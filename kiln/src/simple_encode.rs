//! Straight forward object encoding without any size optimisation.

use crate::{
    error::EncodeError,
    pdf::Object,
    writer::{Encoder, Writer},
};

pub(crate) mod object;
pub(crate) mod section;

/// End of line marker used between the lines of one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Eol {
    Cr,
    #[default]
    Lf,
    CrLf,
}

impl Eol {
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Eol::Cr => b"\r",
            Eol::Lf => b"\n",
            Eol::CrLf => b"\r\n",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub eol: Eol,
    /// Write bytes outside of printable ASCII in literal strings as octal
    /// escapes.
    pub keep_ascii: bool,
}

impl EncodeOptions {
    pub fn with_eol(mut self, eol: Eol) -> Self {
        self.eol = eol;
        self
    }

    pub fn with_keep_ascii(mut self, keep_ascii: bool) -> Self {
        self.keep_ascii = keep_ascii;
        self
    }
}

/// Stateless encoder, the options are fixed for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleEncoder {
    options: EncodeOptions,
}

impl SimpleEncoder {
    pub const fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    pub(crate) fn eol(&self) -> &'static [u8] {
        self.options.eol.as_bytes()
    }

    /// `%` followed by the payload. The line ending is left to the caller.
    pub fn write_comment(&self, payload: &[u8], writer: &mut dyn Writer) {
        writer.write(b"%");
        writer.write(payload);
    }
}

/// Encode a single object with the given options.
pub fn serialize(obj: &Object, options: EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    SimpleEncoder::new(options).encode(obj)
}

use crate::error::EncodeError;

pub use self::document::{PdfWriter, WriterConfig, BINARY_MARKER};

mod document;

/// Append-only byte sink.
pub trait Writer {
    fn write(&mut self, buf: &[u8]);

    /// Number of bytes written so far.
    fn position(&self) -> usize;
}

impl Writer for Vec<u8> {
    fn write(&mut self, buf: &[u8]) {
        self.extend_from_slice(buf);
    }

    fn position(&self) -> usize {
        self.len()
    }
}

/// Counts the bytes it is given and drops them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LenCounter(usize);

impl Writer for LenCounter {
    fn write(&mut self, buf: &[u8]) {
        self.0 += buf.len();
    }

    fn position(&self) -> usize {
        self.0
    }
}

pub trait Encoder<T: ?Sized> {
    fn write_to(&self, obj: &T, writer: &mut dyn Writer) -> Result<(), EncodeError>;

    /// Number of bytes `write_to` produces for `obj`.
    fn encoded_len(&self, obj: &T) -> Result<usize, EncodeError> {
        let mut counter = LenCounter::default();
        self.write_to(obj, &mut counter)?;
        Ok(counter.position())
    }

    fn encode(&self, obj: &T) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        self.write_to(obj, &mut out)?;
        Ok(out)
    }
}

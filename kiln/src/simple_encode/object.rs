use crate::{
    error::EncodeError,
    pdf::Object,
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

pub(crate) mod array;
pub(crate) mod dictionary;
pub(crate) mod indirect;
pub(crate) mod name;
pub(crate) mod stream;
pub(crate) mod string;

pub(crate) const TRUE_OBJECT: &[u8] = b"true";
pub(crate) const FALSE_OBJECT: &[u8] = b"false";
pub(crate) const NULL_OBJECT: &[u8] = b"null";

impl Encoder<Object> for SimpleEncoder {
    fn write_to(&self, obj: &Object, writer: &mut dyn Writer) -> Result<(), EncodeError> {
        match obj {
            Object::Comment(payload) => self.write_comment(payload, writer),
            Object::Null => writer.write(NULL_OBJECT),
            Object::Bool(true) => writer.write(TRUE_OBJECT),
            Object::Bool(false) => writer.write(FALSE_OBJECT),
            Object::Name(n) => self.write_to(n, writer)?,
            Object::String(s) => self.write_to(s, writer)?,
            Object::HexString(digits) => {
                writer.write(b"<");
                writer.write(digits);
                writer.write(b">");
            }
            Object::Reference(r) => self.write_to(r, writer)?,
            Object::Integer(i) => writer.write(i.to_string().as_bytes()),
            Object::Real(f) => write_real(*f, writer)?,
            Object::Array(a) => self.write_to(a, writer)?,
            Object::Dictionary(d) => self.write_to(d, writer)?,
            Object::Stream(s) => self.write_to(s, writer)?,
        }
        Ok(())
    }
}

impl SimpleEncoder {
    /// Write an element of an array or a dictionary value.
    ///
    /// Comments would swallow the rest of the line and streams have to be
    /// indirect objects, both are rejected here.
    pub(crate) fn write_nested(&self, obj: &Object, writer: &mut dyn Writer) -> Result<(), EncodeError> {
        match obj {
            Object::Comment(_) | Object::Stream(_) => Err(EncodeError::Unserializable { kind: obj.kind() }),
            _ => self.write_to(obj, writer),
        }
    }
}

/// Largest magnitude readers have to accept for reals.
const MAX_REAL: f64 = f32::MAX as f64;

/// Shortest decimal form that reads back as the same value. `Display` for
/// `f64` never uses exponent notation, which PDF doesn't support. Whole
/// numbers keep a `.0` so they don't read back as integers.
fn write_real(f: f64, writer: &mut dyn Writer) -> Result<(), EncodeError> {
    if !f.is_finite() {
        return Err(EncodeError::NonFiniteReal(f));
    }
    if f.abs() > MAX_REAL {
        return Err(EncodeError::RealOutOfRange(f));
    }
    let mut text = f.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    writer.write(text.as_bytes());
    Ok(())
}

use crate::{
    error::EncodeError,
    pdf::{IndirectObject, Object, Reference},
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

const START_OBJECT: &[u8] = b"obj";
const END_OBJECT: &[u8] = b"endobj";

impl Encoder<Reference> for SimpleEncoder {
    fn write_to(&self, r: &Reference, writer: &mut dyn Writer) -> Result<(), EncodeError> {
        writer.write(r.number.to_string().as_bytes());
        writer.write(b" ");
        writer.write(r.generation.to_string().as_bytes());
        writer.write(b" R");
        Ok(())
    }
}

impl Encoder<IndirectObject> for SimpleEncoder {
    fn write_to(&self, o: &IndirectObject, writer: &mut dyn Writer) -> Result<(), EncodeError> {
        self.write_indirect(o.reference, &o.object, writer)
    }
}

impl SimpleEncoder {
    /// `N G obj`, the object and `endobj`, each followed by a line ending.
    pub fn write_indirect(
        &self,
        reference: Reference,
        object: &Object,
        writer: &mut dyn Writer,
    ) -> Result<(), EncodeError> {
        writer.write(reference.number.to_string().as_bytes());
        writer.write(b" ");
        writer.write(reference.generation.to_string().as_bytes());
        writer.write(b" ");
        writer.write(START_OBJECT);
        writer.write(self.eol());
        self.write_to(object, writer)?;
        writer.write(self.eol());
        writer.write(END_OBJECT);
        writer.write(self.eol());
        Ok(())
    }
}

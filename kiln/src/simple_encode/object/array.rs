use crate::{
    error::EncodeError,
    pdf::Array,
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

impl Encoder<Array> for SimpleEncoder {
    fn write_to(&self, array: &Array, writer: &mut dyn Writer) -> Result<(), EncodeError> {
        writer.write(b"[");
        for (i, item) in array.iter().enumerate() {
            if i != 0 {
                writer.write(b" ");
            }
            self.write_nested(item, writer)?;
        }
        writer.write(b"]");
        Ok(())
    }
}

use crate::{
    error::EncodeError,
    pdf::Dictionary,
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

impl Encoder<Dictionary> for SimpleEncoder {
    fn write_to(&self, o: &Dictionary, writer: &mut dyn Writer) -> Result<(), EncodeError> {
        writer.write(b"<<");
        let mut is_first = true;
        for (key, value) in o.iter() {
            if !is_first {
                writer.write(b" ");
            }
            self.write_to(key, writer)?;
            writer.write(b" ");
            self.write_nested(value, writer)?;
            is_first = false
        }
        writer.write(b">>");
        Ok(())
    }
}

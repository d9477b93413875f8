use crate::{
    error::EncodeError,
    pdf::Stream,
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

const START_STREAM: &[u8] = b"stream";
const END_STREAM: &[u8] = b"endstream";

impl Encoder<Stream> for SimpleEncoder {
    fn write_to(&self, s: &Stream, writer: &mut dyn Writer) -> Result<(), EncodeError> {
        self.write_to(&s.dictionary, writer)?;
        writer.write(self.eol());
        writer.write(START_STREAM);
        writer.write(self.eol());
        writer.write(&s.data);
        writer.write(self.eol());
        writer.write(END_STREAM);
        Ok(())
    }
}

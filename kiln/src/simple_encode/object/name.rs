use crate::{
    error::EncodeError,
    pdf::Name,
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

impl Encoder<Name> for SimpleEncoder {
    fn write_to(&self, n: &Name, writer: &mut dyn Writer) -> Result<(), EncodeError> {
        let mut last_write = 0;
        writer.write(b"/");
        for (index, &c) in n.iter().enumerate() {
            if !c.is_ascii_alphanumeric() {
                writer.write(&n[last_write..index]);
                last_write = index + 1;
                writer.write(b"#");
                writer.write(hex::encode([c]).as_bytes())
            }
        }
        writer.write(&n[last_write..]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &[u8], expected: &[u8]) {
        let name = Name::from(name);
        let encoded_len = SimpleEncoder::default().encoded_len(&name).unwrap();
        let mut out = Vec::new();
        SimpleEncoder::default().write_to(&name, &mut out).unwrap();
        assert_eq!(
            out,
            expected,
            "Expected {}, got {}",
            String::from_utf8_lossy(expected),
            String::from_utf8_lossy(&out)
        );
        assert_eq!(encoded_len, out.len());
    }

    #[test]
    fn delimiter_in_the_middle() {
        check(b"A B", b"/A#20B");
        check(b"Hello World!", b"/Hello#20World#21");
    }

    #[test]
    fn delimiter_start() {
        check(b" HelloWorld", b"/#20HelloWorld");
    }

    #[test]
    fn delimiter_end() {
        check(b"HelloWorld ", b"/HelloWorld#20");
    }

    #[test]
    fn only_delimiters() {
        check(b"   ", b"/#20#20#20");
    }

    #[test]
    fn no_delimiters() {
        check(b"Catalog", b"/Catalog");
    }

    #[test]
    fn empty_name() {
        check(b"", b"/");
    }

    #[test]
    fn lowercase_hex() {
        check(b"\xff\x00#", b"/#ff#00#23");
        check(b"Font.Bold-1", b"/Font#2eBold#2d1");
    }
}

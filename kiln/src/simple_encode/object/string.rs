use crate::{
    error::EncodeError,
    pdf::LiteralString,
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

/// Two byte escapes. Parentheses are missing on purpose, only the unbalanced
/// ones get escaped.
fn short_escape(c: u8) -> Option<&'static [u8]> {
    match c {
        b'\n' => Some(br"\n"),
        b'\r' => Some(br"\r"),
        b'\t' => Some(br"\t"),
        0x08 => Some(br"\b"),
        0x0c => Some(br"\f"),
        b'\\' => Some(br"\\"),
        _ => None,
    }
}

/// Indices of all parentheses that have no partner, in ascending order.
fn unbalanced_parentheses(s: &[u8]) -> Vec<usize> {
    let mut open = Vec::new();
    let mut unbalanced = Vec::new();
    for (index, &c) in s.iter().enumerate() {
        match c {
            b'(' => open.push(index),
            b')' => {
                if open.pop().is_none() {
                    unbalanced.push(index);
                }
            }
            _ => {}
        }
    }
    // unclosed opening parentheses
    unbalanced.extend(open);
    unbalanced.sort_unstable();
    unbalanced
}

impl Encoder<LiteralString> for SimpleEncoder {
    fn write_to(&self, str: &LiteralString, writer: &mut dyn Writer) -> Result<(), EncodeError> {
        writer.write(b"(");

        let unbalanced = unbalanced_parentheses(str);
        let mut unbalanced = unbalanced.iter().copied().peekable();

        let mut last_written_index = 0;
        for (index, &c) in str.iter().enumerate() {
            if unbalanced.next_if_eq(&index).is_some() {
                // the parenthesis itself is written with the next chunk
                writer.write(&str[last_written_index..index]);
                writer.write(br"\");
                last_written_index = index;
            } else if let Some(escape) = short_escape(c) {
                writer.write(&str[last_written_index..index]);
                writer.write(escape);
                last_written_index = index + 1;
            } else if self.options().keep_ascii && !(0x20..=0x7e).contains(&c) {
                writer.write(&str[last_written_index..index]);
                writer.write(format!("\\{:03o}", c).as_bytes());
                last_written_index = index + 1;
            }
        }
        writer.write(&str[last_written_index..]);
        writer.write(b")");
        Ok(())
    }
}

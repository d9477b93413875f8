use crate::{
    error::EncodeError,
    pdf::{
        trailer::{STARTXREF, TRAILER},
        Dictionary, Trailer, Xref, XrefEntry,
    },
    simple_encode::{Eol, SimpleEncoder},
    writer::{Encoder, Writer},
};

const XREF: &[u8] = b"xref";

/// Largest byte offset that fits into the 10 digit offset column.
const MAX_OFFSET: u64 = 9_999_999_999;

impl Encoder<Xref> for SimpleEncoder {
    fn write_to(&self, xref: &Xref, writer: &mut dyn Writer) -> Result<(), EncodeError> {
        log::trace!("write XRef table with {} entries", xref.len());

        writer.write(XREF);
        writer.write(self.eol());
        for subsection in xref.subsections() {
            writer.write(format!("{} {}", subsection.first, subsection.count()).as_bytes());
            writer.write(self.eol());
            for entry in subsection.entries.iter() {
                writer.write(xref_line(entry)?.as_bytes());
                writer.write(self.entry_eol());
            }
        }
        Ok(())
    }
}

impl SimpleEncoder {
    /// Two byte terminator of an entry line, single byte line endings get a
    /// leading space.
    fn entry_eol(&self) -> &'static [u8] {
        match self.options().eol {
            Eol::Cr => b" \r",
            Eol::Lf => b" \n",
            Eol::CrLf => b"\r\n",
        }
    }
}

/// Fixed width entry line without the line ending.
fn xref_line(entry: &XrefEntry) -> Result<String, EncodeError> {
    match entry {
        XrefEntry::Used(used) => {
            if used.byte_offset as u64 > MAX_OFFSET {
                return Err(EncodeError::OffsetOverflow {
                    number: used.number,
                    offset: used.byte_offset,
                });
            }
            Ok(format!("{:010} {:05} n", used.byte_offset, used.generation))
        }
        XrefEntry::Free(free) => Ok(format!("{:010} {:05} f", free.next_free, free.generation)),
        XrefEntry::UsedCompressed(compressed) => Err(EncodeError::UnsupportedXrefEntry {
            number: compressed.number,
        }),
    }
}

impl Encoder<Trailer> for SimpleEncoder {
    fn write_to(&self, trailer: &Trailer, writer: &mut dyn Writer) -> Result<(), EncodeError> {
        self.write_trailer(&trailer.dictionary, trailer.startxref, writer)
    }
}

impl SimpleEncoder {
    pub fn write_trailer(
        &self,
        dictionary: &Dictionary,
        startxref: usize,
        writer: &mut dyn Writer,
    ) -> Result<(), EncodeError> {
        log::trace!("write Trailer");

        writer.write(TRAILER);
        writer.write(self.eol());
        self.write_to(dictionary, writer)?;
        writer.write(self.eol());
        writer.write(STARTXREF);
        writer.write(self.eol());
        writer.write(startxref.to_string().as_bytes());
        writer.write(self.eol());
        Ok(())
    }
}

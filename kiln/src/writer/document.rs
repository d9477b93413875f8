use std::io;

use fnv::FnvHashMap;

use crate::{
    error::{EncodeError, KilnError},
    pdf::{Dictionary, Object, Reference, UsedObject, Xref, XrefEntry},
    simple_encode::{EncodeOptions, SimpleEncoder},
    writer::Encoder,
};

const FORMAT: &[u8] = b"PDF-";
const EOF_MARKER: &[u8] = b"%%EOF";

/// High bit bytes of the second header comment, they tell tools that the
/// file contains binary data.
pub const BINARY_MARKER: [u8; 4] = [0xe2, 0xe3, 0xcf, 0xd3];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterConfig {
    pub encode: EncodeOptions,
    /// Keep a copy of every written object, see [`PdfWriter::object`].
    pub keep_objects: bool,
}

impl WriterConfig {
    pub fn with_encode(mut self, encode: EncodeOptions) -> Self {
        self.encode = encode;
        self
    }

    pub fn with_keep_objects(mut self, keep_objects: bool) -> Self {
        self.keep_objects = keep_objects;
        self
    }
}

/// Appends one PDF document to a growing buffer.
///
/// Every call only appends. Calls that fail leave the buffer as it was.
/// The caller decides the order: header, objects, xref table, trailer and
/// the EOF marker.
#[derive(Debug, Default)]
pub struct PdfWriter {
    buffer: Vec<u8>,
    /// Bytes in front of `buffer`, either flushed or part of an existing file
    /// this writer appends to.
    base_offset: usize,
    encoder: SimpleEncoder,
    offsets: FnvHashMap<Reference, usize>,
    objects: Option<FnvHashMap<Reference, Object>>,
}

impl PdfWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self::appending(0, config)
    }

    /// Writer for an incremental update behind `existing_len` bytes of an
    /// existing document. All offsets count from the start of that document.
    pub fn appending(existing_len: usize, config: WriterConfig) -> Self {
        Self {
            buffer: Vec::new(),
            base_offset: existing_len,
            encoder: SimpleEncoder::new(config.encode),
            offsets: FnvHashMap::default(),
            objects: config.keep_objects.then(FnvHashMap::default),
        }
    }

    pub fn encoder(&self) -> &SimpleEncoder {
        &self.encoder
    }

    /// Offset the next written byte will have in the document.
    pub fn position(&self) -> usize {
        self.base_offset + self.buffer.len()
    }

    /// `%PDF-M.m` and, if requested, the binary marker comment.
    pub fn write_header(&mut self, version: (u8, u8), with_binary_marker: bool) {
        log::debug!("write header PDF-{}.{}", version.0, version.1);

        let mut format = FORMAT.to_vec();
        format.extend_from_slice(format!("{}.{}", version.0, version.1).as_bytes());
        self.write_comment(&format);
        if with_binary_marker {
            self.write_comment(&BINARY_MARKER);
        }
    }

    /// `%` + payload + line ending.
    pub fn write_comment(&mut self, payload: &[u8]) {
        self.encoder.write_comment(payload, &mut self.buffer);
        self.buffer.extend_from_slice(self.encoder.eol());
    }

    /// Write `contents` as indirect object `reference` and return the offset
    /// it starts at. That offset belongs into the xref entry of the object.
    pub fn write_object(&mut self, reference: Reference, contents: &Object) -> Result<usize, KilnError> {
        let offset = self.position();
        log::trace!("write object {} at {}", reference, offset);

        self.append(|encoder, buffer| encoder.write_indirect(reference, contents, buffer))
            .map_err(|source| KilnError::Object { reference, source })?;

        self.offsets.insert(reference, offset);
        if let Some(objects) = self.objects.as_mut() {
            objects.insert(reference, contents.clone());
        }
        Ok(offset)
    }

    /// Write the table and return its offset, the `startxref` value.
    pub fn write_xref_table(&mut self, xref: &Xref) -> Result<usize, KilnError> {
        let startxref = self.position();
        log::debug!("write xref table with {} subsections at {}", xref.subsections().len(), startxref);

        self.append(|encoder, buffer| encoder.write_to(xref, buffer))
            .map_err(KilnError::Xref)?;
        Ok(startxref)
    }

    pub fn write_trailer(&mut self, trailer: &Dictionary, startxref: usize) -> Result<(), KilnError> {
        log::debug!("write trailer pointing to {}", startxref);

        self.append(|encoder, buffer| encoder.write_trailer(trailer, startxref, buffer))
            .map_err(KilnError::Trailer)
    }

    pub fn write_eof(&mut self) {
        self.buffer.extend_from_slice(EOF_MARKER);
        self.buffer.extend_from_slice(self.encoder.eol());
    }

    /// Run `f` on the buffer and drop everything it wrote if it fails.
    fn append<F>(&mut self, f: F) -> Result<(), EncodeError>
    where
        F: FnOnce(&SimpleEncoder, &mut Vec<u8>) -> Result<(), EncodeError>,
    {
        let start = self.buffer.len();
        let result = f(&self.encoder, &mut self.buffer);
        if result.is_err() {
            self.buffer.truncate(start);
        }
        result
    }

    /// Offset of the last object written for `reference`.
    pub fn offset_of(&self, reference: Reference) -> Option<usize> {
        self.offsets.get(&reference).copied()
    }

    /// In-use entries for all written objects, ordered by object number.
    ///
    /// An object number written with two different generations shows up
    /// twice, which [`Xref::from_entries`] refuses.
    pub fn used_entries(&self) -> Vec<XrefEntry> {
        let mut written: Vec<(&Reference, &usize)> = self.offsets.iter().collect();
        written.sort_unstable();
        written
            .into_iter()
            .map(|(reference, &byte_offset)| {
                UsedObject {
                    number: reference.number,
                    byte_offset,
                    generation: reference.generation,
                }
                .into()
            })
            .collect()
    }

    /// The object last written for `reference`. Only available when the
    /// writer was created with `keep_objects`.
    pub fn object(&self, reference: Reference) -> Option<&Object> {
        self.objects.as_ref()?.get(&reference)
    }

    /// Move the buffered bytes into `sink`. Offsets keep counting from the
    /// start of the document.
    pub fn flush_to<W: io::Write>(&mut self, sink: &mut W) -> Result<(), KilnError> {
        sink.write_all(&self.buffer)?;
        self.base_offset += self.buffer.len();
        self.buffer.clear();
        Ok(())
    }

    /// Bytes not yet flushed.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

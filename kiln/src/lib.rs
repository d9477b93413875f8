//! Serialize PDF objects and write documents incrementally.
//!
//! [`simple_encode`] turns objects into their exact byte representation,
//! [`PdfWriter`] appends indirect objects, the xref table and the trailer to
//! one growing buffer while keeping track of the byte offsets.
//!
//! ```
//! use kiln::{
//!     pdf::{Dictionary, FreeObject, Name, Object, Reference, TrailerInfo, Xref},
//!     PdfWriter,
//! };
//!
//! let mut writer = PdfWriter::default();
//! writer.write_header((1, 7), true);
//!
//! let mut catalog = Dictionary::new();
//! catalog.insert(Name::from("Type"), Object::Name(Name::from("Catalog")));
//! let root = Reference::new(1, 0);
//! writer.write_object(root, &Object::Dictionary(catalog))?;
//!
//! let mut entries = writer.used_entries();
//! entries.push(FreeObject::head(0).into());
//! let xref = Xref::from_entries(entries)?;
//! let startxref = writer.write_xref_table(&xref)?;
//! let trailer = Dictionary::from(TrailerInfo::new(&xref, root));
//! writer.write_trailer(&trailer, startxref)?;
//! writer.write_eof();
//!
//! assert!(writer.as_bytes().ends_with(b"%%EOF\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use error::{EncodeError, KilnError};
pub use simple_encode::{serialize, EncodeOptions, Eol, SimpleEncoder};
pub use writer::{Encoder, PdfWriter, Writer, WriterConfig};

mod error;
pub mod pdf;
pub mod simple_encode;
pub mod writer;

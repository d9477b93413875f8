use super::{Array, Dictionary, HexString, Name, Object, Reference, Xref};

pub const TRAILER: &[u8] = b"trailer";
pub const STARTXREF: &[u8] = b"startxref";
pub const K_SIZE: &[u8] = b"Size";
pub const K_PREVIOUS: &[u8] = b"Prev";
pub const K_ROOT: &[u8] = b"Root";
pub const K_INFO: &[u8] = b"Info";
pub const K_ID: &[u8] = b"ID";

/// Trailer dictionary together with the byte offset of its xref table.
#[derive(Debug, Clone, PartialEq)]
pub struct Trailer {
    pub dictionary: Dictionary,
    pub startxref: usize,
}

/// The well known trailer entries.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailerInfo {
    /// Highest object number used in the PDF document plus one
    pub size: u32,

    /// Byte offset to the previous xref section
    pub previous: Option<usize>,

    /// Reference to the root object.
    pub root: Reference,

    /// Information for this document.
    pub info: Option<Reference>,

    /// File identifier.
    pub id: Option<[HexString; 2]>,
}

impl TrailerInfo {
    /// Derive `/Size` from the highest object number in `xref`.
    pub fn new(xref: &Xref, root: Reference) -> Self {
        Self {
            size: xref.highest_number().map_or(0, |n| n.saturating_add(1)),
            previous: None,
            root,
            info: None,
            id: None,
        }
    }

    pub fn with_previous(mut self, offset: usize) -> Self {
        self.previous = Some(offset);
        self
    }

    pub fn with_info(mut self, info: Reference) -> Self {
        self.info = Some(info);
        self
    }

    pub fn with_id(mut self, original: HexString, current: HexString) -> Self {
        self.id = Some([original, current]);
        self
    }
}

impl From<TrailerInfo> for Dictionary {
    fn from(trailer: TrailerInfo) -> Self {
        let mut dict = Dictionary::with_capacity(5);
        dict.insert(Name::from(K_SIZE), Object::Integer(trailer.size.into()));

        if let Some(prev) = trailer.previous {
            // offsets past i64::MAX can't be addressed by any file
            let prev = i64::try_from(prev).unwrap_or(i64::MAX);
            dict.insert(Name::from(K_PREVIOUS), Object::Integer(prev));
        }

        dict.insert(Name::from(K_ROOT), Object::Reference(trailer.root));

        if let Some(info) = trailer.info {
            dict.insert(Name::from(K_INFO), Object::Reference(info));
        }

        if let Some([id0, id1]) = trailer.id {
            dict.insert(
                Name::from(K_ID),
                Object::Array(Array::from(vec![Object::HexString(id0), Object::HexString(id1)])),
            );
        }

        dict
    }
}

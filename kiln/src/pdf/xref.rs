use indexmap::IndexMap;

use crate::error::EncodeError;

/// References to objects inside a PDF section.
///
/// The entries are grouped into subsections of consecutive object numbers.
/// Every subsection is introduced by its first object number and the entry
/// count, readers compute the object number of an entry from its position
/// inside the subsection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Xref {
    subsections: Vec<XrefSubsection>,
}

impl Xref {
    /// Group `entries` into subsections. The order of `entries` doesn't matter.
    pub fn from_entries(entries: Vec<XrefEntry>) -> Result<Self, EncodeError> {
        Ok(Self {
            subsections: build_subsections(entries)?,
        })
    }

    pub fn subsections(&self) -> &[XrefSubsection] {
        &self.subsections
    }

    pub fn entries(&self) -> impl Iterator<Item = &XrefEntry> {
        self.subsections.iter().flat_map(|s| s.entries.iter())
    }

    pub fn used_objects(&self) -> impl Iterator<Item = &UsedObject> {
        self.entries()
            .filter_map(|entry| if let XrefEntry::Used(u) = entry { Some(u) } else { None })
    }

    pub fn free_objects(&self) -> impl Iterator<Item = &FreeObject> {
        self.entries()
            .filter_map(|entry| if let XrefEntry::Free(f) = entry { Some(f) } else { None })
    }

    /// Number of entries over all subsections.
    pub fn len(&self) -> usize {
        self.subsections.iter().map(XrefSubsection::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subsections.is_empty()
    }

    pub fn highest_number(&self) -> Option<u32> {
        self.entries().map(XrefEntry::number).max()
    }
}

impl TryFrom<Vec<XrefEntry>> for Xref {
    type Error = EncodeError;

    fn try_from(entries: Vec<XrefEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

/// A run of entries for the object numbers `first..first + count()`.
#[derive(Debug, Clone, PartialEq)]
pub struct XrefSubsection {
    pub first: u32,
    pub entries: Vec<XrefEntry>,
}

impl XrefSubsection {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Split `entries` into subsections of consecutive object numbers.
///
/// Entries are sorted by object number. Each entry is appended to the current
/// run; if it doesn't directly follow the previous entry of that run it is
/// moved into a new run that starts with it.
pub fn build_subsections(mut entries: Vec<XrefEntry>) -> Result<Vec<XrefSubsection>, EncodeError> {
    entries.sort_unstable_by_key(XrefEntry::number);

    let mut current = match entries.first() {
        Some(entry) => entry.number(),
        None => return Ok(Vec::new()),
    };
    let mut runs = IndexMap::<u32, Vec<XrefEntry>>::new();

    for entry in entries {
        let run = runs.entry(current).or_default();
        run.push(entry);

        let tail = match &run[..] {
            [.., previous, last] => Some((previous.number(), last.number())),
            _ => None,
        };
        if let Some((previous, last)) = tail {
            if last == previous {
                return Err(EncodeError::DuplicateObjectNumber(last));
            }
            if last - previous != 1 {
                if let Some(split) = run.pop() {
                    current = last;
                    runs.insert(current, vec![split]);
                }
            }
        }
    }

    log::trace!("grouped xref entries into {} subsections", runs.len());

    Ok(runs
        .into_iter()
        .map(|(first, entries)| XrefSubsection { first, entries })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeObject {
    /// Number of this object
    pub number: u32,
    /// Generation number to use if the object number is reused
    pub generation: u16,
    /// Next free object number, 0 ends the list
    pub next_free: u32,
}

impl FreeObject {
    /// Entry for object 0, the head of the free list.
    pub fn head(next_free: u32) -> Self {
        Self {
            number: 0,
            generation: u16::MAX,
            next_free,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedObject {
    /// Number of this object
    pub number: u32,
    /// The position of this object in the pdf file in bytes, starting from the
    /// beginning of the PDF.
    pub byte_offset: usize,
    pub generation: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedCompressedObject {
    /// Number of this object
    pub number: u32,
    /// The number of the stream object that contains this object
    pub containing_object: u32,
    /// Index of this object inside the object stream
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XrefEntry {
    Free(FreeObject),
    Used(UsedObject),
    /// Object is stored in compressed stream
    UsedCompressed(UsedCompressedObject),
}

impl XrefEntry {
    pub fn number(&self) -> u32 {
        match self {
            XrefEntry::Free(FreeObject { number, .. }) => *number,
            XrefEntry::Used(UsedObject { number, .. }) => *number,
            XrefEntry::UsedCompressed(UsedCompressedObject { number, .. }) => *number,
        }
    }
}

impl From<UsedCompressedObject> for XrefEntry {
    fn from(v: UsedCompressedObject) -> Self {
        Self::UsedCompressed(v)
    }
}

impl From<UsedObject> for XrefEntry {
    fn from(v: UsedObject) -> Self {
        Self::Used(v)
    }
}

impl From<FreeObject> for XrefEntry {
    fn from(v: FreeObject) -> Self {
        Self::Free(v)
    }
}

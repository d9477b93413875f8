use std::ops::Deref;

use super::Bytes;

/// Arbitrary bytes written as a parenthesized literal string.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct LiteralString(Vec<u8>);

impl From<Vec<u8>> for LiteralString {
    fn from(v: Vec<u8>) -> Self {
        LiteralString(v)
    }
}

impl From<&[u8]> for LiteralString {
    fn from(v: &[u8]) -> Self {
        LiteralString(v.to_vec())
    }
}

impl From<&str> for LiteralString {
    fn from(s: &str) -> Self {
        LiteralString(s.as_bytes().to_vec())
    }
}

impl Deref for LiteralString {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for LiteralString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LiteralString")
            .field(&String::from_utf8_lossy(&self.0[..]))
            .finish()
    }
}

/// Hex digits that are written verbatim between `<` and `>`.
///
/// The digits are not validated. Use [`HexString::encode`] to build one from
/// raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexString(Bytes);

impl HexString {
    /// Wrap bytes that already are hex digits.
    pub fn from_digits(digits: impl Into<Bytes>) -> Self {
        Self(digits.into())
    }

    /// Hex encode raw bytes using lowercase digits.
    pub fn encode(raw: impl AsRef<[u8]>) -> Self {
        Self(hex::encode(raw).into_bytes().into())
    }
}

impl Deref for HexString {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

use super::{Bytes, Dictionary, Name, Object, K_LENGTH};

/// Stream dictionary plus payload. The payload is written exactly as given,
/// any filters listed in the dictionary have to be applied by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Stream {
    pub dictionary: Dictionary,
    pub data: Bytes,
}

impl Stream {
    /// Create a stream and set `/Length` to the payload size unless the
    /// dictionary already carries one.
    pub fn new(mut dictionary: Dictionary, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        if !dictionary.contains_key(K_LENGTH) {
            // payloads beyond i64::MAX bytes can't exist in memory
            let len = i64::try_from(data.len()).unwrap_or(i64::MAX);
            dictionary.insert(Name::from(K_LENGTH), Object::Integer(len));
        }
        Self { dictionary, data }
    }
}

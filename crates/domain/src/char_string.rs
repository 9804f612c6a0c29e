use std::fmt;

use crate::name::unescape;
use crate::CodecError;

pub const MAX_STRING_LEN: usize = 255;

/// A DNS `<character-string>`: up to 255 arbitrary bytes.
///
/// `new` leaves the length unchecked so oversized values can be built and
/// reported when written to a payload; `from_presentation` rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CharacterString(Vec<u8>);

impl CharacterString {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses one presentation token, quoted or bare, resolving escapes.
    pub fn from_presentation(token: &str) -> Result<Self, CodecError> {
        let inner = token
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(token);

        let bytes = inner.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'\\' {
                let (byte, consumed) = unescape(&bytes[i + 1..]).ok_or_else(|| {
                    CodecError::unparsable(format!("bad escape in string {}", token))
                })?;
                out.push(byte);
                i += 1 + consumed;
            } else {
                out.push(bytes[i]);
                i += 1;
            }
        }
        if out.len() > MAX_STRING_LEN {
            return Err(CodecError::unparsable(format!(
                "string of {} bytes exceeds {}",
                out.len(),
                MAX_STRING_LEN
            )));
        }
        Ok(Self(out))
    }
}

impl From<&str> for CharacterString {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<String> for CharacterString {
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}

impl From<Vec<u8>> for CharacterString {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl fmt::Display for CharacterString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for &byte in &self.0 {
            match byte {
                b'"' | b'\\' => write!(f, "\\{}", byte as char)?,
                0x20..=0x7E => write!(f, "{}", byte as char)?,
                _ => write!(f, "\\{:03}", byte)?,
            }
        }
        f.write_str("\"")
    }
}

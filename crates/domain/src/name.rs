use std::fmt;
use std::str::FromStr;

use crate::CodecError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

/// A fully qualified domain name held as raw labels.
///
/// Label bytes keep the case they were created with; comparison is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn from_labels<I, L>(labels: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let name = Self {
            labels: labels.into_iter().map(Into::into).collect(),
        };
        name.check_limits()?;
        Ok(name)
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Length of the name in counted-label form, terminator included.
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|label| label.len() + 1).sum::<usize>() + 1
    }

    pub fn to_ascii_lowercase(&self) -> Self {
        Self {
            labels: self
                .labels
                .iter()
                .map(|label| label.to_ascii_lowercase())
                .collect(),
        }
    }

    fn check_limits(&self) -> Result<(), CodecError> {
        for label in &self.labels {
            if label.is_empty() {
                return Err(CodecError::invalid_name("empty label"));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(CodecError::invalid_name(format!(
                    "label of {} bytes exceeds {}",
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
        }

        let wire_len = self.wire_len();
        if wire_len > MAX_NAME_LEN {
            return Err(CodecError::invalid_name(format!(
                "name of {} bytes exceeds {}",
                wire_len, MAX_NAME_LEN
            )));
        }
        Ok(())
    }
}

impl FromStr for DomainName {
    type Err = CodecError;

    /// Parses presentation text. `@` and `.` mean the root; a name without a
    /// trailing dot is taken relative to the root.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CodecError::invalid_name("empty name"));
        }
        if s == "@" || s == "." {
            return Ok(Self::root());
        }

        let bytes = s.as_bytes();
        let mut labels = Vec::new();
        let mut current = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\\' => {
                    let (byte, consumed) = unescape(&bytes[i + 1..])
                        .ok_or_else(|| CodecError::invalid_name(format!("bad escape in '{}'", s)))?;
                    current.push(byte);
                    i += 1 + consumed;
                }
                b'.' => {
                    if current.is_empty() {
                        return Err(CodecError::invalid_name(format!("empty label in '{}'", s)));
                    }
                    labels.push(std::mem::take(&mut current));
                    i += 1;
                }
                byte => {
                    current.push(byte);
                    i += 1;
                }
            }
        }

        if !current.is_empty() {
            labels.push(current);
        }

        Self::from_labels(labels)
    }
}

/// Decodes the text after a backslash: `\DDD` or a single escaped byte.
/// Returns the byte and how many input bytes were used.
pub(crate) fn unescape(rest: &[u8]) -> Option<(u8, usize)> {
    let first = *rest.first()?;
    if !first.is_ascii_digit() {
        return Some((first, 1));
    }

    let digits = rest.get(..3)?;
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let value = digits
        .iter()
        .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));
    u8::try_from(value).ok().map(|byte| (byte, 3))
}

fn write_label(f: &mut fmt::Formatter<'_>, label: &[u8]) -> fmt::Result {
    for &byte in label {
        match byte {
            b'.' | b'\\' | b'"' | b'(' | b')' | b';' | b'@' | b'$' => {
                write!(f, "\\{}", byte as char)?
            }
            0x21..=0x7E => write!(f, "{}", byte as char)?,
            _ => write!(f, "\\{:03}", byte)?,
        }
    }
    Ok(())
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in &self.labels {
            write_label(f, label)?;
            f.write_str(".")?;
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// DNS class of a resource record. The management protocol only carries
/// Internet class data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum RecordClass {
    IN,
    CH,
    HS,
    NONE,
    ANY,
    Unknown(u16),
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::IN => "IN",
            RecordClass::CH => "CH",
            RecordClass::HS => "HS",
            RecordClass::NONE => "NONE",
            RecordClass::ANY => "ANY",
            RecordClass::Unknown(_) => "CLASS",
        }
    }

    pub fn is_internet(&self) -> bool {
        matches!(self, RecordClass::IN)
    }
}

impl From<u16> for RecordClass {
    fn from(code: u16) -> Self {
        match code {
            1 => RecordClass::IN,
            3 => RecordClass::CH,
            4 => RecordClass::HS,
            254 => RecordClass::NONE,
            255 => RecordClass::ANY,
            other => RecordClass::Unknown(other),
        }
    }
}

impl From<RecordClass> for u16 {
    fn from(class: RecordClass) -> Self {
        match class {
            RecordClass::IN => 1,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::NONE => 254,
            RecordClass::ANY => 255,
            RecordClass::Unknown(code) => code,
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordClass::Unknown(code) => write!(f, "CLASS{}", code),
            known => f.write_str(known.as_str()),
        }
    }
}

impl FromStr for RecordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        match upper.as_str() {
            "IN" => Ok(RecordClass::IN),
            "CH" | "CHAOS" => Ok(RecordClass::CH),
            "HS" | "HESIOD" => Ok(RecordClass::HS),
            "NONE" => Ok(RecordClass::NONE),
            "ANY" | "*" => Ok(RecordClass::ANY),
            _ => upper
                .strip_prefix("CLASS")
                .and_then(|code| code.parse::<u16>().ok())
                .map(RecordClass::from)
                .ok_or_else(|| format!("Unknown record class: {}", s)),
        }
    }
}

use std::fmt;

/// Groups record types by the shape of their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadFamily {
    Tombstone,

    Address,

    NameReference,

    Compound,

    CharacterString,

    Dnssec,

    Wins,

    Opaque,
}

impl PayloadFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadFamily::Tombstone => "tombstone",
            PayloadFamily::Address => "address",
            PayloadFamily::NameReference => "name_reference",
            PayloadFamily::Compound => "compound",
            PayloadFamily::CharacterString => "character_string",
            PayloadFamily::Dnssec => "dnssec",
            PayloadFamily::Wins => "wins",
            PayloadFamily::Opaque => "opaque",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayloadFamily::Tombstone => "Tombstoned Records",
            PayloadFamily::Address => "Address Records",
            PayloadFamily::NameReference => "Name Reference Records",
            PayloadFamily::Compound => "Compound Records",
            PayloadFamily::CharacterString => "Character String Records",
            PayloadFamily::Dnssec => "DNSSEC Records",
            PayloadFamily::Wins => "WINS Lookup Records",
            PayloadFamily::Opaque => "Opaque Records",
        }
    }

    pub fn all() -> &'static [PayloadFamily] {
        &[
            PayloadFamily::Tombstone,
            PayloadFamily::Address,
            PayloadFamily::NameReference,
            PayloadFamily::Compound,
            PayloadFamily::CharacterString,
            PayloadFamily::Dnssec,
            PayloadFamily::Wins,
            PayloadFamily::Opaque,
        ]
    }
}

impl fmt::Display for PayloadFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod family;
pub use family::PayloadFamily;

/// Record type codes understood by the DNS server management protocol.
///
/// Codes outside the table are kept as `Unknown` so their payload can be
/// carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    ZERO,
    A,
    NS,
    MD,
    MF,
    CNAME,
    SOA,
    MB,
    MG,
    MR,
    NULL,
    WKS,
    PTR,
    HINFO,
    MINFO,
    MX,
    TXT,
    RP,
    AFSDB,
    X25,
    ISDN,
    RT,
    SIG,
    KEY,
    AAAA,
    NXT,
    SRV,
    ATMA,
    NAPTR,
    DNAME,
    DS,
    RRSIG,
    NSEC,
    DNSKEY,
    DHCID,
    NSEC3,
    NSEC3PARAM,
    TLSA,
    WINS,
    WINSR,
    Unknown(u16),
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::ZERO => "ZERO",
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::MD => "MD",
            RecordType::MF => "MF",
            RecordType::CNAME => "CNAME",
            RecordType::SOA => "SOA",
            RecordType::MB => "MB",
            RecordType::MG => "MG",
            RecordType::MR => "MR",
            RecordType::NULL => "NULL",
            RecordType::WKS => "WKS",
            RecordType::PTR => "PTR",
            RecordType::HINFO => "HINFO",
            RecordType::MINFO => "MINFO",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::RP => "RP",
            RecordType::AFSDB => "AFSDB",
            RecordType::X25 => "X25",
            RecordType::ISDN => "ISDN",
            RecordType::RT => "RT",
            RecordType::SIG => "SIG",
            RecordType::KEY => "KEY",
            RecordType::AAAA => "AAAA",
            RecordType::NXT => "NXT",
            RecordType::SRV => "SRV",
            RecordType::ATMA => "ATMA",
            RecordType::NAPTR => "NAPTR",
            RecordType::DNAME => "DNAME",
            RecordType::DS => "DS",
            RecordType::RRSIG => "RRSIG",
            RecordType::NSEC => "NSEC",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::DHCID => "DHCID",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::TLSA => "TLSA",
            RecordType::WINS => "WINS",
            RecordType::WINSR => "WINSR",
            RecordType::Unknown(_) => "TYPE",
        }
    }

    pub fn to_u16(&self) -> u16 {
        u16::from(*self)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RecordType::Unknown(_))
    }

    pub fn family(&self) -> PayloadFamily {
        match self {
            RecordType::ZERO => PayloadFamily::Tombstone,

            RecordType::A | RecordType::AAAA => PayloadFamily::Address,

            RecordType::NS
            | RecordType::MD
            | RecordType::MF
            | RecordType::CNAME
            | RecordType::MB
            | RecordType::MG
            | RecordType::MR
            | RecordType::PTR
            | RecordType::DNAME => PayloadFamily::NameReference,

            RecordType::SOA
            | RecordType::WKS
            | RecordType::MINFO
            | RecordType::MX
            | RecordType::RP
            | RecordType::AFSDB
            | RecordType::RT
            | RecordType::NXT
            | RecordType::SRV
            | RecordType::ATMA
            | RecordType::NAPTR => PayloadFamily::Compound,

            RecordType::HINFO | RecordType::TXT | RecordType::X25 | RecordType::ISDN => {
                PayloadFamily::CharacterString
            }

            RecordType::SIG
            | RecordType::KEY
            | RecordType::DS
            | RecordType::RRSIG
            | RecordType::NSEC
            | RecordType::DNSKEY
            | RecordType::DHCID
            | RecordType::NSEC3
            | RecordType::NSEC3PARAM
            | RecordType::TLSA => PayloadFamily::Dnssec,

            RecordType::WINS | RecordType::WINSR => PayloadFamily::Wins,

            RecordType::NULL | RecordType::Unknown(_) => PayloadFamily::Opaque,
        }
    }

    /// Whether the protocol lays this type out exactly as RFC 1035 style
    /// rdata does, given counted-label names.
    pub fn shares_rfc_layout(&self) -> bool {
        !matches!(
            self,
            RecordType::ZERO
                | RecordType::SOA
                | RecordType::WKS
                | RecordType::NXT
                | RecordType::NSEC3
                | RecordType::WINS
                | RecordType::WINSR
        )
    }

    pub fn all() -> &'static [RecordType] {
        use RecordType::*;
        &[
            ZERO, A, NS, MD, MF, CNAME, SOA, MB, MG, MR, NULL, WKS, PTR, HINFO, MINFO, MX, TXT,
            RP, AFSDB, X25, ISDN, RT, SIG, KEY, AAAA, NXT, SRV, ATMA, NAPTR, DNAME, DS, RRSIG,
            NSEC, DNSKEY, DHCID, NSEC3, NSEC3PARAM, TLSA, WINS, WINSR,
        ]
    }

    pub fn by_family(family: PayloadFamily) -> Vec<RecordType> {
        Self::all()
            .iter()
            .copied()
            .filter(|record_type| record_type.family() == family)
            .collect()
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        match code {
            0 => RecordType::ZERO,
            1 => RecordType::A,
            2 => RecordType::NS,
            3 => RecordType::MD,
            4 => RecordType::MF,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            7 => RecordType::MB,
            8 => RecordType::MG,
            9 => RecordType::MR,
            10 => RecordType::NULL,
            11 => RecordType::WKS,
            12 => RecordType::PTR,
            13 => RecordType::HINFO,
            14 => RecordType::MINFO,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            17 => RecordType::RP,
            18 => RecordType::AFSDB,
            19 => RecordType::X25,
            20 => RecordType::ISDN,
            21 => RecordType::RT,
            24 => RecordType::SIG,
            25 => RecordType::KEY,
            28 => RecordType::AAAA,
            30 => RecordType::NXT,
            33 => RecordType::SRV,
            34 => RecordType::ATMA,
            35 => RecordType::NAPTR,
            39 => RecordType::DNAME,
            43 => RecordType::DS,
            46 => RecordType::RRSIG,
            47 => RecordType::NSEC,
            48 => RecordType::DNSKEY,
            49 => RecordType::DHCID,
            50 => RecordType::NSEC3,
            51 => RecordType::NSEC3PARAM,
            52 => RecordType::TLSA,
            0xFF01 => RecordType::WINS,
            0xFF02 => RecordType::WINSR,
            other => RecordType::Unknown(other),
        }
    }
}

impl From<RecordType> for u16 {
    fn from(record_type: RecordType) -> Self {
        match record_type {
            RecordType::ZERO => 0,
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::MD => 3,
            RecordType::MF => 4,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::MB => 7,
            RecordType::MG => 8,
            RecordType::MR => 9,
            RecordType::NULL => 10,
            RecordType::WKS => 11,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MINFO => 14,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::RP => 17,
            RecordType::AFSDB => 18,
            RecordType::X25 => 19,
            RecordType::ISDN => 20,
            RecordType::RT => 21,
            RecordType::SIG => 24,
            RecordType::KEY => 25,
            RecordType::AAAA => 28,
            RecordType::NXT => 30,
            RecordType::SRV => 33,
            RecordType::ATMA => 34,
            RecordType::NAPTR => 35,
            RecordType::DNAME => 39,
            RecordType::DS => 43,
            RecordType::RRSIG => 46,
            RecordType::NSEC => 47,
            RecordType::DNSKEY => 48,
            RecordType::DHCID => 49,
            RecordType::NSEC3 => 50,
            RecordType::NSEC3PARAM => 51,
            RecordType::TLSA => 52,
            RecordType::WINS => 0xFF01,
            RecordType::WINSR => 0xFF02,
            RecordType::Unknown(code) => code,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Unknown(code) => write!(f, "TYPE{}", code),
            known => f.write_str(known.as_str()),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        if upper == "WINS-R" {
            return Ok(RecordType::WINSR);
        }

        if let Some(known) = Self::all().iter().find(|t| t.as_str() == upper) {
            return Ok(*known);
        }

        upper
            .strip_prefix("TYPE")
            .and_then(|code| code.parse::<u16>().ok())
            .map(RecordType::from)
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}

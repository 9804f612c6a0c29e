use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

mod compound;
mod dnssec;
mod presentation;
mod wins;

pub use compound::{Atma, AtmaFormat, MailError, Naptr, Preference, Soa, Srv, Wks};
pub use compound::{PROTOCOL_TCP, PROTOCOL_UDP};
pub use dnssec::{Ds, Key, Nsec, Nsec3, Nsec3Param, Nxt, Sig, Tlsa};
pub use wins::{Wins, WinsR, DEFAULT_CACHE_TIMEOUT, DEFAULT_LOOKUP_TIMEOUT};
pub use wins::{WINS_FLAG_LOCAL, WINS_FLAG_SCOPE};

use crate::{CharacterString, DomainName, RecordType};

/// Type-specific content of a record. Types sharing a payload layout share a
/// variant, so the record type travels next to the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// Deleted record; holds the FILETIME of deletion.
    Tombstone { entombed_time: u64 },
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Name(DomainName),
    Soa(Soa),
    Null(Vec<u8>),
    Wks(Wks),
    Strings(Vec<CharacterString>),
    MailError(MailError),
    Preference(Preference),
    Sig(Sig),
    Key(Key),
    Nxt(Nxt),
    Srv(Srv),
    Atma(Atma),
    Naptr(Naptr),
    Ds(Ds),
    Nsec(Nsec),
    Dhcid(Vec<u8>),
    Nsec3(Nsec3),
    Nsec3Param(Nsec3Param),
    Tlsa(Tlsa),
    Wins(Wins),
    WinsR(WinsR),
    /// Payload of a type without a known layout, carried verbatim.
    Unknown(Vec<u8>),
}

impl RecordData {
    pub fn kind(&self) -> &'static str {
        match self {
            RecordData::Tombstone { .. } => "tombstone",
            RecordData::A(_) => "ipv4 address",
            RecordData::Aaaa(_) => "ipv6 address",
            RecordData::Name(_) => "domain name",
            RecordData::Soa(_) => "soa",
            RecordData::Null(_) => "null",
            RecordData::Wks(_) => "wks",
            RecordData::Strings(_) => "character strings",
            RecordData::MailError(_) => "mailbox pair",
            RecordData::Preference(_) => "preference",
            RecordData::Sig(_) => "signature",
            RecordData::Key(_) => "key",
            RecordData::Nxt(_) => "nxt",
            RecordData::Srv(_) => "srv",
            RecordData::Atma(_) => "atma",
            RecordData::Naptr(_) => "naptr",
            RecordData::Ds(_) => "ds",
            RecordData::Nsec(_) => "nsec",
            RecordData::Dhcid(_) => "dhcid",
            RecordData::Nsec3(_) => "nsec3",
            RecordData::Nsec3Param(_) => "nsec3param",
            RecordData::Tlsa(_) => "tlsa",
            RecordData::Wins(_) => "wins",
            RecordData::WinsR(_) => "wins-r",
            RecordData::Unknown(_) => "opaque",
        }
    }

    /// Whether this data may be carried by a record of `record_type`.
    /// Opaque data only fits types without a structured layout.
    pub fn is_compatible_with(&self, record_type: RecordType) -> bool {
        use RecordType as T;

        match self {
            RecordData::Unknown(_) => !record_type.is_known(),
            RecordData::Tombstone { .. } => record_type == T::ZERO,
            RecordData::A(_) => record_type == T::A,
            RecordData::Aaaa(_) => record_type == T::AAAA,
            RecordData::Name(_) => matches!(
                record_type,
                T::NS | T::MD | T::MF | T::CNAME | T::MB | T::MG | T::MR | T::PTR | T::DNAME
            ),
            RecordData::Soa(_) => record_type == T::SOA,
            RecordData::Null(_) => record_type == T::NULL,
            RecordData::Wks(_) => record_type == T::WKS,
            RecordData::Strings(strings) => match record_type {
                T::HINFO => strings.len() == 2,
                T::ISDN => matches!(strings.len(), 1 | 2),
                T::X25 | T::TXT => !strings.is_empty(),
                _ => false,
            },
            RecordData::MailError(_) => matches!(record_type, T::MINFO | T::RP),
            RecordData::Preference(_) => matches!(record_type, T::MX | T::AFSDB | T::RT),
            RecordData::Sig(_) => matches!(record_type, T::SIG | T::RRSIG),
            RecordData::Key(_) => matches!(record_type, T::KEY | T::DNSKEY),
            RecordData::Nxt(_) => record_type == T::NXT,
            RecordData::Srv(_) => record_type == T::SRV,
            RecordData::Atma(_) => record_type == T::ATMA,
            RecordData::Naptr(_) => record_type == T::NAPTR,
            RecordData::Ds(_) => record_type == T::DS,
            RecordData::Nsec(_) => record_type == T::NSEC,
            RecordData::Dhcid(_) => record_type == T::DHCID,
            RecordData::Nsec3(_) => record_type == T::NSEC3,
            RecordData::Nsec3Param(_) => record_type == T::NSEC3PARAM,
            RecordData::Tlsa(_) => record_type == T::TLSA,
            RecordData::Wins(_) => record_type == T::WINS,
            RecordData::WinsR(_) => record_type == T::WINSR,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Tombstone { entombed_time } => write!(f, "{}", entombed_time),
            RecordData::A(address) => write!(f, "{}", address),
            RecordData::Aaaa(address) => write!(f, "{}", address),
            RecordData::Name(name) => write!(f, "{}", name),
            RecordData::Soa(soa) => write!(f, "{}", soa),
            RecordData::Null(bytes) | RecordData::Unknown(bytes) => {
                presentation::write_generic(f, bytes)
            }
            RecordData::Wks(wks) => write!(f, "{}", wks),
            RecordData::Strings(strings) => {
                for (i, string) in strings.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", string)?;
                }
                Ok(())
            }
            RecordData::MailError(mail) => write!(f, "{}", mail),
            RecordData::Preference(preference) => write!(f, "{}", preference),
            RecordData::Sig(sig) => write!(f, "{}", sig),
            RecordData::Key(key) => write!(f, "{}", key),
            RecordData::Nxt(nxt) => write!(f, "{}", nxt),
            RecordData::Srv(srv) => write!(f, "{}", srv),
            RecordData::Atma(atma) => write!(f, "{}", atma),
            RecordData::Naptr(naptr) => write!(f, "{}", naptr),
            RecordData::Ds(ds) => write!(f, "{}", ds),
            RecordData::Nsec(nsec) => write!(f, "{}", nsec),
            RecordData::Dhcid(digest) => presentation::write_base64(f, digest),
            RecordData::Nsec3(nsec3) => write!(f, "{}", nsec3),
            RecordData::Nsec3Param(param) => write!(f, "{}", param),
            RecordData::Tlsa(tlsa) => write!(f, "{}", tlsa),
            RecordData::Wins(wins) => write!(f, "{}", wins),
            RecordData::WinsR(wins_r) => write!(f, "{}", wins_r),
        }
    }
}

use std::fmt;

use super::presentation::{
    write_base64, write_hex, write_salt, write_signature_time, write_types,
};
use crate::{DomainName, RecordType};

/// SIG and RRSIG share one layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sig {
    pub type_covered: RecordType,
    pub algorithm: u8,
    pub labels: u8,
    pub original_ttl: u32,
    pub expiration: u32,
    pub inception: u32,
    pub key_tag: u16,
    pub signer: DomainName,
    pub signature: Vec<u8>,
}

impl fmt::Display for Sig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ",
            self.type_covered, self.algorithm, self.labels, self.original_ttl
        )?;
        write_signature_time(f, self.expiration)?;
        f.write_str(" ")?;
        write_signature_time(f, self.inception)?;
        write!(f, " {} {} ", self.key_tag, self.signer)?;
        write_base64(f, &self.signature)
    }
}

/// KEY and DNSKEY share one layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub flags: u16,
    pub protocol: u8,
    pub algorithm: u8,
    pub key: Vec<u8>,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.flags, self.protocol, self.algorithm)?;
        write_base64(f, &self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nxt {
    pub next: DomainName,
    pub types: Vec<RecordType>,
}

impl fmt::Display for Nxt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.next)?;
        write_types(f, &self.types)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ds {
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,
    pub digest: Vec<u8>,
}

impl fmt::Display for Ds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.key_tag, self.algorithm, self.digest_type
        )?;
        write_hex(f, &self.digest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nsec {
    pub next: DomainName,
    pub types: Vec<RecordType>,
}

impl fmt::Display for Nsec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.next)?;
        write_types(f, &self.types)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nsec3 {
    pub algorithm: u8,
    pub flags: u8,
    pub iterations: u16,
    pub salt: Vec<u8>,
    pub next_hashed_owner: Vec<u8>,
    pub types: Vec<RecordType>,
}

impl fmt::Display for Nsec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.algorithm, self.flags, self.iterations)?;
        write_salt(f, &self.salt)?;
        write!(
            f,
            " {}",
            data_encoding::BASE32_DNSSEC.encode(&self.next_hashed_owner)
        )?;
        write_types(f, &self.types)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nsec3Param {
    pub algorithm: u8,
    pub flags: u8,
    pub iterations: u16,
    pub salt: Vec<u8>,
}

impl fmt::Display for Nsec3Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.algorithm, self.flags, self.iterations)?;
        write_salt(f, &self.salt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlsa {
    pub usage: u8,
    pub selector: u8,
    pub matching_type: u8,
    pub data: Vec<u8>,
}

impl fmt::Display for Tlsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.usage, self.selector, self.matching_type
        )?;
        write_hex(f, &self.data)
    }
}

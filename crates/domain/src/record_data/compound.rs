use std::fmt;
use std::net::Ipv4Addr;

use super::presentation::write_hex;
use crate::{CharacterString, DomainName};

pub const PROTOCOL_TCP: u8 = 6;
pub const PROTOCOL_UDP: u8 = 17;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Soa {
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
    pub primary_server: DomainName,
    pub administrator: DomainName,
}

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.primary_server,
            self.administrator,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

/// Well-known services bound to an address. `services` holds the
/// space-separated service names as one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wks {
    pub address: Ipv4Addr,
    pub protocol: u8,
    pub services: CharacterString,
}

impl fmt::Display for Wks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.address)?;
        match self.protocol {
            PROTOCOL_TCP => f.write_str("tcp")?,
            PROTOCOL_UDP => f.write_str("udp")?,
            other => write!(f, "{}", other)?,
        }
        for service in String::from_utf8_lossy(self.services.as_bytes()).split_whitespace() {
            write!(f, " {}", service)?;
        }
        Ok(())
    }
}

/// MINFO and RP: a responsible mailbox plus a mailbox for errors (or, for
/// RP, a name holding TXT records).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailError {
    pub mailbox: DomainName,
    pub error_mailbox: DomainName,
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mailbox, self.error_mailbox)
    }
}

/// MX, AFSDB and RT: a 16-bit preference followed by a host name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    pub preference: u16,
    pub exchange: DomainName,
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Srv {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: DomainName,
}

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmaFormat {
    /// ATM End System Address, 20 raw bytes.
    Aesa,
    /// E.164 number as ASCII digits.
    E164,
    Unknown(u8),
}

impl From<u8> for AtmaFormat {
    fn from(code: u8) -> Self {
        match code {
            0 => AtmaFormat::Aesa,
            1 => AtmaFormat::E164,
            other => AtmaFormat::Unknown(other),
        }
    }
}

impl From<AtmaFormat> for u8 {
    fn from(format: AtmaFormat) -> Self {
        match format {
            AtmaFormat::Aesa => 0,
            AtmaFormat::E164 => 1,
            AtmaFormat::Unknown(code) => code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atma {
    pub format: AtmaFormat,
    pub address: Vec<u8>,
}

impl fmt::Display for Atma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            AtmaFormat::E164 => {
                f.write_str("+")?;
                f.write_str(&String::from_utf8_lossy(&self.address))
            }
            _ => write_hex(f, &self.address),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naptr {
    pub order: u16,
    pub preference: u16,
    pub flags: CharacterString,
    pub service: CharacterString,
    pub regexp: CharacterString,
    pub replacement: DomainName,
}

impl fmt::Display for Naptr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.order, self.preference, self.flags, self.service, self.regexp, self.replacement
        )
    }
}

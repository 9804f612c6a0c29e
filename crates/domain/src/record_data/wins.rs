use std::fmt;
use std::net::Ipv4Addr;

use crate::DomainName;

/// Answers from WINS lookups may be cached and forwarded to other servers
/// unless this bit is set.
pub const WINS_FLAG_LOCAL: u32 = 0x0001_0000;
pub const WINS_FLAG_SCOPE: u32 = 0x8000_0000;

pub const DEFAULT_LOOKUP_TIMEOUT: u32 = 2;
pub const DEFAULT_CACHE_TIMEOUT: u32 = 900;

fn write_mapping(
    f: &mut fmt::Formatter<'_>,
    mapping_flag: u32,
    lookup_timeout: u32,
    cache_timeout: u32,
) -> fmt::Result {
    if mapping_flag & WINS_FLAG_LOCAL != 0 {
        f.write_str("LOCAL ")?;
    }
    if mapping_flag & WINS_FLAG_SCOPE != 0 {
        f.write_str("SCOPE ")?;
    }
    write!(f, "L{} C{}", lookup_timeout, cache_timeout)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wins {
    pub mapping_flag: u32,
    pub lookup_timeout: u32,
    pub cache_timeout: u32,
    pub servers: Vec<Ipv4Addr>,
}

impl Wins {
    pub fn new(servers: Vec<Ipv4Addr>) -> Self {
        Self {
            mapping_flag: 0,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            cache_timeout: DEFAULT_CACHE_TIMEOUT,
            servers,
        }
    }

    pub fn is_local(&self) -> bool {
        self.mapping_flag & WINS_FLAG_LOCAL != 0
    }
}

impl fmt::Display for Wins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_mapping(f, self.mapping_flag, self.lookup_timeout, self.cache_timeout)?;
        for server in &self.servers {
            write!(f, " {}", server)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinsR {
    pub mapping_flag: u32,
    pub lookup_timeout: u32,
    pub cache_timeout: u32,
    pub result_domain: DomainName,
}

impl WinsR {
    pub fn new(result_domain: DomainName) -> Self {
        Self {
            mapping_flag: 0,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            cache_timeout: DEFAULT_CACHE_TIMEOUT,
            result_domain,
        }
    }

    pub fn is_local(&self) -> bool {
        self.mapping_flag & WINS_FLAG_LOCAL != 0
    }
}

impl fmt::Display for WinsR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_mapping(f, self.mapping_flag, self.lookup_timeout, self.cache_timeout)?;
        write!(f, " {}", self.result_domain)
    }
}

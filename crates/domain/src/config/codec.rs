use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How domain names embedded in a record payload are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameEncoding {
    /// Length-prefixed labels ending with a zero byte.
    #[default]
    Labels,

    /// `DNS_RPC_NAME`: one length byte followed by the dotted name text.
    RpcName,
}

impl NameEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameEncoding::Labels => "labels",
            NameEncoding::RpcName => "rpc-name",
        }
    }
}

impl fmt::Display for NameEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "labels" => Ok(NameEncoding::Labels),
            "rpc-name" | "rpc_name" | "rpcname" => Ok(NameEncoding::RpcName),
            _ => Err(format!("Unknown name encoding: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub name_encoding: NameEncoding,

    /// TTL applied to zone lines that do not carry one.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            name_encoding: NameEncoding::default(),
            default_ttl: default_ttl(),
        }
    }
}

fn default_ttl() -> u32 {
    3600
}

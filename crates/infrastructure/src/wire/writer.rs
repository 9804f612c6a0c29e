use bytes::BufMut;
use dnsp_record_domain::{CharacterString, CodecError, DomainName, NameEncoding};
use std::net::{Ipv4Addr, Ipv6Addr};

use super::{name, string};

/// Accumulates a payload buffer. Integers go out big-endian unless the
/// method says otherwise.
pub(crate) struct PayloadWriter {
    buf: Vec<u8>,
    names: NameEncoding,
}

impl PayloadWriter {
    pub fn new(names: NameEncoding) -> Self {
        Self {
            buf: Vec::with_capacity(64),
            names,
        }
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub fn put_u16(&mut self, value: u16) {
        self.buf.put_u16(value);
    }

    pub fn put_u32(&mut self, value: u32) {
        self.buf.put_u32(value);
    }

    pub fn put_u64_le(&mut self, value: u64) {
        self.buf.put_u64_le(value);
    }

    pub fn put_ipv4(&mut self, address: &Ipv4Addr) {
        self.buf.put_slice(&address.octets());
    }

    pub fn put_ipv6(&mut self, address: &Ipv6Addr) {
        self.buf.put_slice(&address.octets());
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    pub fn put_name(&mut self, domain: &DomainName) -> Result<(), CodecError> {
        match self.names {
            NameEncoding::Labels => {
                name::write_labels(domain, &mut self.buf);
                Ok(())
            }
            NameEncoding::RpcName => name::write_rpc_name(domain, &mut self.buf),
        }
    }

    pub fn put_string(&mut self, text: &CharacterString) -> Result<(), CodecError> {
        string::write_string(text, &mut self.buf)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

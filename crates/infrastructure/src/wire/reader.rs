use dnsp_record_domain::{CharacterString, CodecError, DomainName, NameEncoding};
use std::net::{Ipv4Addr, Ipv6Addr};

use super::{name, string};

/// Bounds-checked cursor over a payload buffer. Integers are big-endian
/// unless the method says otherwise.
pub(crate) struct PayloadReader<'a> {
    data: &'a [u8],
    pos: usize,
    names: NameEncoding,
}

impl<'a> PayloadReader<'a> {
    pub fn new(data: &'a [u8], names: NameEncoding) -> Self {
        Self {
            data,
            pos: 0,
            names,
        }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let end = self.pos + n;
        let Some(slice) = self.data.get(self.pos..end) else {
            return Err(CodecError::PayloadLengthMismatch {
                declared: end,
                available: self.data.len(),
            });
        };
        self.pos = end;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        self.take_array().map(u16::from_be_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        self.take_array().map(u32::from_be_bytes)
    }

    pub fn read_u64_le(&mut self) -> Result<u64, CodecError> {
        self.take_array().map(u64::from_le_bytes)
    }

    pub fn read_ipv4(&mut self) -> Result<Ipv4Addr, CodecError> {
        self.take_array::<4>().map(Ipv4Addr::from)
    }

    pub fn read_ipv6(&mut self) -> Result<Ipv6Addr, CodecError> {
        self.take_array::<16>().map(Ipv6Addr::from)
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, CodecError> {
        self.take(n).map(<[u8]>::to_vec)
    }

    pub fn read_rest(&mut self) -> Vec<u8> {
        let rest = self.data[self.pos..].to_vec();
        self.pos = self.data.len();
        rest
    }

    pub fn read_name(&mut self) -> Result<DomainName, CodecError> {
        let rest = &self.data[self.pos..];
        let (name, used) = match self.names {
            NameEncoding::Labels => name::read_labels(rest)?,
            NameEncoding::RpcName => name::read_rpc_name(rest)?,
        };
        self.pos += used;
        Ok(name)
    }

    pub fn read_string(&mut self) -> Result<CharacterString, CodecError> {
        let (text, used) = string::read_string(&self.data[self.pos..])?;
        self.pos += used;
        Ok(text)
    }

    /// Fails when unread bytes remain.
    pub fn finish(self) -> Result<(), CodecError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CodecError::PayloadLengthMismatch {
                declared: self.pos,
                available: self.data.len(),
            })
        }
    }
}

use crate::{CodecError, RecordType};

pub const HEADER_LEN: usize = 24;

/// Decoded fixed part of a `DNS_RPC_RECORD`. The reserved word is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub data_length: u16,
    pub record_type: RecordType,
    pub flags: u32,
    pub serial: u32,
    pub ttl_seconds: u32,
    pub timestamp: u32,
}

/// Lays out the 24-byte header in NDR (little-endian) order. The reserved
/// word is always zero.
pub fn encode_header(
    record_type: RecordType,
    flags: u32,
    serial: u32,
    ttl_seconds: u32,
    timestamp: u32,
    data_length: u16,
) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[0..2].copy_from_slice(&data_length.to_le_bytes());
    header[2..4].copy_from_slice(&u16::from(record_type).to_le_bytes());
    header[4..8].copy_from_slice(&flags.to_le_bytes());
    header[8..12].copy_from_slice(&serial.to_le_bytes());
    header[12..16].copy_from_slice(&ttl_seconds.to_le_bytes());
    header[16..20].copy_from_slice(&timestamp.to_le_bytes());
    header
}

pub fn decode_header(bytes: &[u8]) -> Result<RecordHeader, CodecError> {
    let Some(header) = bytes.get(..HEADER_LEN) else {
        return Err(CodecError::TruncatedHeader {
            needed: HEADER_LEN,
            available: bytes.len(),
        });
    };

    let u16_at = |offset: usize| u16::from_le_bytes([header[offset], header[offset + 1]]);
    let u32_at = |offset: usize| {
        u32::from_le_bytes([
            header[offset],
            header[offset + 1],
            header[offset + 2],
            header[offset + 3],
        ])
    };

    Ok(RecordHeader {
        data_length: u16_at(0),
        record_type: RecordType::from(u16_at(2)),
        flags: u32_at(4),
        serial: u32_at(8),
        ttl_seconds: u32_at(12),
        timestamp: u32_at(16),
    })
}

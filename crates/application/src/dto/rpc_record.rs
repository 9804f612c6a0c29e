use dnsp_record_domain::{CodecError, RecordType, WireRecord};
use serde::{Deserialize, Serialize};

/// The record shape handed to RPC callers: header fields plus the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcRecord {
    pub data_length: u16,
    #[serde(rename = "type")]
    pub record_type: u16,
    pub flags: u32,
    pub serial: u32,
    pub ttl_seconds: u32,
    pub timestamp: u32,
    pub buffer: Vec<u8>,
}

impl RpcRecord {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<WireRecord> for RpcRecord {
    fn from(record: WireRecord) -> Self {
        Self {
            data_length: record.data_length,
            record_type: u16::from(record.record_type),
            flags: record.flags,
            serial: record.serial,
            ttl_seconds: record.ttl_seconds,
            timestamp: record.timestamp,
            buffer: record.buffer,
        }
    }
}

impl TryFrom<RpcRecord> for WireRecord {
    type Error = CodecError;

    fn try_from(record: RpcRecord) -> Result<Self, Self::Error> {
        let declared = usize::from(record.data_length);
        if declared != record.buffer.len() {
            return Err(CodecError::PayloadLengthMismatch {
                declared,
                available: record.buffer.len(),
            });
        }

        Ok(WireRecord {
            data_length: record.data_length,
            record_type: RecordType::from(record.record_type),
            flags: record.flags,
            serial: record.serial,
            ttl_seconds: record.ttl_seconds,
            timestamp: record.timestamp,
            buffer: record.buffer,
        })
    }
}

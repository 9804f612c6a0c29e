use dnsp_record_application::ports::RecordCodec;
use dnsp_record_domain::{CodecConfig, CodecError, NameEncoding, ResourceRecord, WireRecord};

use super::payload::{decode_payload, encode_payload};

/// `DNS_RPC_RECORD` codec. Stateless apart from the name layout, so one
/// instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireRecordCodec {
    names: NameEncoding,
}

impl WireRecordCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_encoding(names: NameEncoding) -> Self {
        Self { names }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::with_name_encoding(config.name_encoding)
    }

    pub fn name_encoding(&self) -> NameEncoding {
        self.names
    }
}

impl RecordCodec for WireRecordCodec {
    fn encode(&self, record: &ResourceRecord) -> Result<WireRecord, CodecError> {
        if !record.class.is_internet() {
            return Err(CodecError::UnsupportedClass(record.class));
        }

        let buffer = encode_payload(record.record_type, &record.data, self.names)?;
        WireRecord::new(record.record_type, record.ttl, buffer)
    }

    fn decode(&self, bytes: &[u8]) -> Result<ResourceRecord, CodecError> {
        let record = WireRecord::from_bytes(bytes)?;
        self.decode_record(&record)
    }

    fn decode_record(&self, record: &WireRecord) -> Result<ResourceRecord, CodecError> {
        let declared = usize::from(record.data_length);
        if declared != record.buffer.len() {
            return Err(CodecError::PayloadLengthMismatch {
                declared,
                available: record.buffer.len(),
            });
        }

        let data = decode_payload(record.record_type, &record.buffer, self.names)?;
        Ok(ResourceRecord::rooted(record.record_type, record.ttl_seconds, data))
    }
}

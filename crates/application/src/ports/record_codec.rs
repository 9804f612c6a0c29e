use dnsp_record_domain::{CodecError, ResourceRecord, WireRecord};

/// Converts structured records to and from `DNS_RPC_RECORD` values.
pub trait RecordCodec: Send + Sync {
    /// Rejects non-IN classes and data that does not fit the record type.
    fn encode(&self, record: &ResourceRecord) -> Result<WireRecord, CodecError>;

    /// Decodes header and payload from raw bytes.
    fn decode(&self, bytes: &[u8]) -> Result<ResourceRecord, CodecError>;

    fn decode_record(&self, record: &WireRecord) -> Result<ResourceRecord, CodecError>;
}

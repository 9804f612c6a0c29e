use dnsp_record_domain::{CodecError, RecordData, RecordType, ResourceRecord};

/// Parses presentation-format text. Implementations return a complete value
/// or an error, never a partially filled one.
pub trait RecordTextParser: Send + Sync {
    fn parse_rdata(&self, record_type: RecordType, text: &str) -> Result<RecordData, CodecError>;

    /// Parses a full zone line: `owner [ttl] [class] type rdata`.
    fn parse_line(&self, line: &str) -> Result<ResourceRecord, CodecError>;
}

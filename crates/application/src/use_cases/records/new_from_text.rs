use dnsp_record_domain::{CodecError, RecordType, ResourceRecord, WireRecord};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{RecordCodec, RecordTextParser};

/// Builds a wire record from presentation text.
pub struct NewRecordFromTextUseCase {
    parser: Arc<dyn RecordTextParser>,
    codec: Arc<dyn RecordCodec>,
}

impl NewRecordFromTextUseCase {
    pub fn new(parser: Arc<dyn RecordTextParser>, codec: Arc<dyn RecordCodec>) -> Self {
        Self { parser, codec }
    }

    /// Parses `text` as the rdata of `record_type`. The record is owned by
    /// the root in class IN; flags, serial and timestamp stay zero.
    #[instrument(skip(self, text), level = "debug")]
    pub fn execute(
        &self,
        record_type: RecordType,
        ttl: u32,
        text: &str,
    ) -> Result<WireRecord, CodecError> {
        let data = self.parser.parse_rdata(record_type, text)?;
        let record = ResourceRecord::rooted(record_type, ttl, data);
        let wire = self.codec.encode(&record)?;

        debug!(
            record_type = %record_type,
            data_length = wire.data_length,
            "Record built from text"
        );
        Ok(wire)
    }

    /// Parses a complete zone line and encodes it. The owner name is parsed
    /// but not carried by the wire record.
    #[instrument(skip(self), level = "debug")]
    pub fn execute_line(&self, line: &str) -> Result<WireRecord, CodecError> {
        let record = self.parser.parse_line(line)?;
        let wire = self.codec.encode(&record)?;

        debug!(
            owner = %record.owner,
            record_type = %record.record_type,
            data_length = wire.data_length,
            "Record built from zone line"
        );
        Ok(wire)
    }
}

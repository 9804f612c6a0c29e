use dnsp_record_domain::{CodecError, ResourceRecord, WireRecord};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RecordCodec;

/// Turns wire records back into structured records owned by the root.
pub struct DecodeRecordUseCase {
    codec: Arc<dyn RecordCodec>,
}

impl DecodeRecordUseCase {
    pub fn new(codec: Arc<dyn RecordCodec>) -> Self {
        Self { codec }
    }

    #[instrument(skip(self, bytes), fields(len = bytes.len()), level = "debug")]
    pub fn execute(&self, bytes: &[u8]) -> Result<ResourceRecord, CodecError> {
        let record = self.codec.decode(bytes)?;
        debug!(record_type = %record.record_type, ttl = record.ttl, "Record decoded");
        Ok(record)
    }

    pub fn execute_record(&self, record: &WireRecord) -> Result<ResourceRecord, CodecError> {
        self.codec.decode_record(record)
    }
}

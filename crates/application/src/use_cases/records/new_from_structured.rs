use dnsp_record_domain::{CodecError, ResourceRecord, WireRecord};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RecordCodec;

pub struct NewRecordFromStructuredUseCase {
    codec: Arc<dyn RecordCodec>,
}

impl NewRecordFromStructuredUseCase {
    pub fn new(codec: Arc<dyn RecordCodec>) -> Self {
        Self { codec }
    }

    #[instrument(skip(self, record), fields(record_type = %record.record_type), level = "debug")]
    pub fn execute(&self, record: &ResourceRecord) -> Result<WireRecord, CodecError> {
        if !record.class.is_internet() {
            return Err(CodecError::UnsupportedClass(record.class));
        }

        let wire = self.codec.encode(record)?;
        debug!(data_length = wire.data_length, "Record built from structured value");
        Ok(wire)
    }
}

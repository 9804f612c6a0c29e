use thiserror::Error;

use crate::{RecordClass, RecordType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Unparsable record text: {0}")]
    UnparsableText(String),

    #[error("Unsupported record class: {0}")]
    UnsupportedClass(RecordClass),

    #[error("Truncated record header: need {needed} bytes, have {available}")]
    TruncatedHeader { needed: usize, available: usize },

    #[error("Payload length mismatch: declared {declared} bytes, have {available}")]
    PayloadLengthMismatch { declared: usize, available: usize },

    #[error("Invalid {record_type} address length: {length} bytes")]
    InvalidAddressLength {
        record_type: RecordType,
        length: usize,
    },

    #[error("Invalid domain name: {0}")]
    InvalidName(String),

    #[error("Invalid character string: declared {declared} bytes, have {available}")]
    InvalidStringLength { declared: usize, available: usize },

    #[error("Record data '{data}' cannot be carried by a {record_type} record")]
    RecordDataMismatch {
        record_type: RecordType,
        data: &'static str,
    },

    #[error("Unsupported record: {0}")]
    UnsupportedRecord(String),
}

impl CodecError {
    pub fn invalid_name(reason: impl Into<String>) -> Self {
        CodecError::InvalidName(reason.into())
    }

    pub fn unparsable(reason: impl Into<String>) -> Self {
        CodecError::UnparsableText(reason.into())
    }
}

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

mod flags;
pub mod header;

pub use flags::RecordFlags;
pub use header::{RecordHeader, HEADER_LEN};

use crate::{CodecError, RecordType};

/// A `DNS_RPC_RECORD`: fixed header plus the type-specific payload buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRecord {
    pub data_length: u16,
    pub record_type: RecordType,
    pub flags: u32,
    pub serial: u32,
    pub ttl_seconds: u32,
    /// Hours since 1601-01-01 UTC of the last refresh; 0 for static records.
    pub timestamp: u32,
    pub buffer: Vec<u8>,
}

impl WireRecord {
    /// Builds a record around `buffer`, deriving `data_length` from it.
    pub fn new(record_type: RecordType, ttl_seconds: u32, buffer: Vec<u8>) -> Result<Self, CodecError> {
        let data_length =
            u16::try_from(buffer.len()).map_err(|_| CodecError::PayloadLengthMismatch {
                declared: usize::from(u16::MAX),
                available: buffer.len(),
            })?;

        Ok(Self {
            data_length,
            record_type,
            flags: 0,
            serial: 0,
            ttl_seconds,
            timestamp: 0,
            buffer,
        })
    }

    pub fn header(&self) -> RecordHeader {
        RecordHeader {
            data_length: self.data_length,
            record_type: self.record_type,
            flags: self.flags,
            serial: self.serial,
            ttl_seconds: self.ttl_seconds,
            timestamp: self.timestamp,
        }
    }

    pub fn record_flags(&self) -> RecordFlags {
        RecordFlags::from(self.flags)
    }

    pub fn is_static(&self) -> bool {
        self.timestamp == 0
    }

    pub fn aging_time(&self) -> Option<DateTime<Utc>> {
        if self.is_static() {
            return None;
        }
        aging_epoch()?.checked_add_signed(TimeDelta::hours(i64::from(self.timestamp)))
    }

    /// Converts a wall-clock time to the hour count stored in `timestamp`.
    /// Times before 1601 map to 0.
    pub fn timestamp_from(time: DateTime<Utc>) -> u32 {
        let Some(epoch) = aging_epoch() else {
            return 0;
        };
        let hours = time.signed_duration_since(epoch).num_hours();
        u32::try_from(hours.max(0)).unwrap_or(u32::MAX)
    }

    /// Serializes the header followed by the buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.buffer.len());
        bytes.extend_from_slice(&header::encode_header(
            self.record_type,
            self.flags,
            self.serial,
            self.ttl_seconds,
            self.timestamp,
            self.data_length,
        ));
        bytes.extend_from_slice(&self.buffer);
        bytes
    }

    /// Splits `bytes` into header and buffer. The byte count after the
    /// header must equal the declared data length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let header = header::decode_header(bytes)?;
        let payload = &bytes[HEADER_LEN..];
        let declared = usize::from(header.data_length);
        if payload.len() != declared {
            return Err(CodecError::PayloadLengthMismatch {
                declared,
                available: payload.len(),
            });
        }

        Ok(Self {
            data_length: header.data_length,
            record_type: header.record_type,
            flags: header.flags,
            serial: header.serial,
            ttl_seconds: header.ttl_seconds,
            timestamp: header.timestamp,
            buffer: payload.to_vec(),
        })
    }
}

fn aging_epoch() -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(1601, 1, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|time| time.and_utc())
}

use dnsp_record_domain::{CodecError, NameEncoding, RecordData, RecordType};

use super::dispatch::payload_codec;
use super::reader::PayloadReader;
use super::writer::PayloadWriter;

pub(super) mod address;
pub(super) mod compound;
pub(super) mod dnssec;
pub(super) mod names;
pub(super) mod opaque;
pub(super) mod strings;
pub(super) mod wins;

/// Produces the payload buffer for `data` carried under `record_type`.
/// Opaque data is written verbatim for unregistered types.
pub fn encode_payload(
    record_type: RecordType,
    data: &RecordData,
    names: NameEncoding,
) -> Result<Vec<u8>, CodecError> {
    if !data.is_compatible_with(record_type) {
        return Err(mismatch(record_type, data));
    }

    let mut writer = PayloadWriter::new(names);
    match data {
        RecordData::Unknown(bytes) => writer.put_bytes(bytes),
        _ => payload_codec(record_type).encode(record_type, data, &mut writer)?,
    }
    Ok(writer.into_bytes())
}

/// Parses a payload buffer. The whole buffer must be consumed.
pub fn decode_payload(
    record_type: RecordType,
    buffer: &[u8],
    names: NameEncoding,
) -> Result<RecordData, CodecError> {
    let codec = payload_codec(record_type);
    codec.check_min_len(record_type, buffer.len())?;

    let mut reader = PayloadReader::new(buffer, names);
    let data = codec.decode(record_type, &mut reader)?;
    reader.finish()?;
    Ok(data)
}

pub(super) fn mismatch(record_type: RecordType, data: &RecordData) -> CodecError {
    CodecError::RecordDataMismatch {
        record_type,
        data: data.kind(),
    }
}

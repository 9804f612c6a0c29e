use dnsp_record_domain::{CodecError, RecordData, RecordType};

use super::mismatch;
use crate::wire::reader::PayloadReader;
use crate::wire::writer::PayloadWriter;

pub(crate) fn encode_raw(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    match data {
        RecordData::Null(bytes) | RecordData::Dhcid(bytes) | RecordData::Unknown(bytes) => {
            w.put_bytes(bytes);
            Ok(())
        }
        _ => Err(mismatch(record_type, data)),
    }
}

pub(crate) fn decode_null(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Null(r.read_rest()))
}

pub(crate) fn decode_dhcid(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Dhcid(r.read_rest()))
}

pub(crate) fn decode_unknown(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Unknown(r.read_rest()))
}

use dnsp_record_domain::{CodecError, RecordData, RecordType};

use super::mismatch;
use crate::wire::reader::PayloadReader;
use crate::wire::writer::PayloadWriter;

pub(crate) fn encode_name(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Name(name) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_name(name)
}

/// The buffer holds exactly one name; anything after it is malformed name
/// data.
pub(crate) fn decode_name(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    let name = r.read_name()?;
    if !r.is_empty() {
        return Err(CodecError::invalid_name(format!(
            "{} bytes follow the name",
            r.remaining()
        )));
    }
    Ok(RecordData::Name(name))
}

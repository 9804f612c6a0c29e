use dnsp_record_domain::{CodecError, RecordData, RecordType};

use super::mismatch;
use crate::wire::reader::PayloadReader;
use crate::wire::writer::PayloadWriter;

pub(crate) fn encode_strings(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Strings(strings) = data else {
        return Err(mismatch(record_type, data));
    };
    for text in strings {
        w.put_string(text)?;
    }
    Ok(())
}

/// HINFO holds exactly two strings, ISDN one or two, and X25 and TXT as
/// many as fill the buffer.
pub(crate) fn decode_strings(
    record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    let mut strings = vec![r.read_string()?];

    match record_type {
        RecordType::HINFO => strings.push(r.read_string()?),
        RecordType::ISDN if !r.is_empty() => strings.push(r.read_string()?),
        RecordType::X25 | RecordType::TXT => {
            while !r.is_empty() {
                strings.push(r.read_string()?);
            }
        }
        _ => {}
    }

    Ok(RecordData::Strings(strings))
}

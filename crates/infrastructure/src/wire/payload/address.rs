use dnsp_record_domain::{CodecError, RecordData, RecordType};

use super::mismatch;
use crate::wire::reader::PayloadReader;
use crate::wire::writer::PayloadWriter;

pub(crate) fn encode_tombstone(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Tombstone { entombed_time } = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_u64_le(*entombed_time);
    Ok(())
}

pub(crate) fn decode_tombstone(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Tombstone {
        entombed_time: r.read_u64_le()?,
    })
}

pub(crate) fn encode_address(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    match data {
        RecordData::A(address) => w.put_ipv4(address),
        RecordData::Aaaa(address) => w.put_ipv6(address),
        _ => return Err(mismatch(record_type, data)),
    }
    Ok(())
}

pub(crate) fn decode_a(
    record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    exact_length(record_type, r, 4)?;
    Ok(RecordData::A(r.read_ipv4()?))
}

pub(crate) fn decode_aaaa(
    record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    exact_length(record_type, r, 16)?;
    Ok(RecordData::Aaaa(r.read_ipv6()?))
}

fn exact_length(
    record_type: RecordType,
    r: &PayloadReader<'_>,
    expected: usize,
) -> Result<(), CodecError> {
    if r.remaining() != expected {
        return Err(CodecError::InvalidAddressLength {
            record_type,
            length: r.remaining(),
        });
    }
    Ok(())
}

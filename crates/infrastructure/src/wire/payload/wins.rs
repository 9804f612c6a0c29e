use dnsp_record_domain::{CodecError, RecordData, RecordType, Wins, WinsR};

use super::mismatch;
use crate::wire::reader::PayloadReader;
use crate::wire::writer::PayloadWriter;

pub(crate) fn encode_wins(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Wins(wins) = data else {
        return Err(mismatch(record_type, data));
    };
    let count = u32::try_from(wins.servers.len()).map_err(|_| {
        CodecError::PayloadLengthMismatch {
            declared: wins.servers.len(),
            available: u32::MAX as usize,
        }
    })?;

    w.put_u32(wins.mapping_flag);
    w.put_u32(wins.lookup_timeout);
    w.put_u32(wins.cache_timeout);
    w.put_u32(count);
    for server in &wins.servers {
        w.put_ipv4(server);
    }
    Ok(())
}

pub(crate) fn decode_wins(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    let mapping_flag = r.read_u32()?;
    let lookup_timeout = r.read_u32()?;
    let cache_timeout = r.read_u32()?;
    let count = r.read_u32()? as usize;

    if count.saturating_mul(4) != r.remaining() {
        return Err(CodecError::PayloadLengthMismatch {
            declared: count.saturating_mul(4),
            available: r.remaining(),
        });
    }

    let servers = (0..count)
        .map(|_| r.read_ipv4())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RecordData::Wins(Wins {
        mapping_flag,
        lookup_timeout,
        cache_timeout,
        servers,
    }))
}

pub(crate) fn encode_wins_r(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::WinsR(wins_r) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_u32(wins_r.mapping_flag);
    w.put_u32(wins_r.lookup_timeout);
    w.put_u32(wins_r.cache_timeout);
    w.put_name(&wins_r.result_domain)
}

pub(crate) fn decode_wins_r(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::WinsR(WinsR {
        mapping_flag: r.read_u32()?,
        lookup_timeout: r.read_u32()?,
        cache_timeout: r.read_u32()?,
        result_domain: r.read_name()?,
    }))
}

use dnsp_record_domain::{
    Atma, AtmaFormat, CodecError, MailError, Naptr, Nxt, Preference, RecordData, RecordType, Soa,
    Srv, Wks,
};

use super::mismatch;
use crate::wire::reader::PayloadReader;
use crate::wire::writer::PayloadWriter;

// SOA keeps its counters ahead of the two names.
pub(crate) fn encode_soa(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Soa(soa) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_u32(soa.serial);
    w.put_u32(soa.refresh);
    w.put_u32(soa.retry);
    w.put_u32(soa.expire);
    w.put_u32(soa.minimum);
    w.put_name(&soa.primary_server)?;
    w.put_name(&soa.administrator)
}

pub(crate) fn decode_soa(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Soa(Soa {
        serial: r.read_u32()?,
        refresh: r.read_u32()?,
        retry: r.read_u32()?,
        expire: r.read_u32()?,
        minimum: r.read_u32()?,
        primary_server: r.read_name()?,
        administrator: r.read_name()?,
    }))
}

pub(crate) fn encode_wks(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Wks(wks) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_ipv4(&wks.address);
    w.put_u8(wks.protocol);
    w.put_string(&wks.services)
}

pub(crate) fn decode_wks(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Wks(Wks {
        address: r.read_ipv4()?,
        protocol: r.read_u8()?,
        services: r.read_string()?,
    }))
}

pub(crate) fn encode_mail_error(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::MailError(mail) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_name(&mail.mailbox)?;
    w.put_name(&mail.error_mailbox)
}

pub(crate) fn decode_mail_error(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::MailError(MailError {
        mailbox: r.read_name()?,
        error_mailbox: r.read_name()?,
    }))
}

pub(crate) fn encode_preference(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Preference(preference) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_u16(preference.preference);
    w.put_name(&preference.exchange)
}

pub(crate) fn decode_preference(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Preference(Preference {
        preference: r.read_u16()?,
        exchange: r.read_name()?,
    }))
}

pub(crate) fn encode_srv(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Srv(srv) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_u16(srv.priority);
    w.put_u16(srv.weight);
    w.put_u16(srv.port);
    w.put_name(&srv.target)
}

pub(crate) fn decode_srv(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Srv(Srv {
        priority: r.read_u16()?,
        weight: r.read_u16()?,
        port: r.read_u16()?,
        target: r.read_name()?,
    }))
}

pub(crate) fn encode_atma(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Atma(atma) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_u8(u8::from(atma.format));
    w.put_bytes(&atma.address);
    Ok(())
}

pub(crate) fn decode_atma(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Atma(Atma {
        format: AtmaFormat::from(r.read_u8()?),
        address: r.read_rest(),
    }))
}

pub(crate) fn encode_naptr(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Naptr(naptr) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_u16(naptr.order);
    w.put_u16(naptr.preference);
    w.put_string(&naptr.flags)?;
    w.put_string(&naptr.service)?;
    w.put_string(&naptr.regexp)?;
    w.put_name(&naptr.replacement)
}

pub(crate) fn decode_naptr(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Naptr(Naptr {
        order: r.read_u16()?,
        preference: r.read_u16()?,
        flags: r.read_string()?,
        service: r.read_string()?,
        regexp: r.read_string()?,
        replacement: r.read_name()?,
    }))
}

// NXT lists its types as a counted array ahead of the next name.
pub(crate) fn encode_nxt(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Nxt(nxt) = data else {
        return Err(mismatch(record_type, data));
    };
    let count = u16::try_from(nxt.types.len()).map_err(|_| CodecError::PayloadLengthMismatch {
        declared: nxt.types.len(),
        available: usize::from(u16::MAX),
    })?;
    w.put_u16(count);
    for listed in &nxt.types {
        w.put_u16(u16::from(*listed));
    }
    w.put_name(&nxt.next)
}

pub(crate) fn decode_nxt(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    let count = usize::from(r.read_u16()?);
    if count * 2 > r.remaining() {
        return Err(CodecError::PayloadLengthMismatch {
            declared: count * 2,
            available: r.remaining(),
        });
    }

    let types = (0..count)
        .map(|_| r.read_u16().map(RecordType::from))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RecordData::Nxt(Nxt {
        next: r.read_name()?,
        types,
    }))
}

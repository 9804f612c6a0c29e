use dnsp_record_domain::{
    CodecError, Ds, Key, Nsec, Nsec3, Nsec3Param, RecordData, RecordType, Sig, Tlsa,
};

use super::mismatch;
use crate::wire::bitmap::{decode_type_bitmap, encode_type_bitmap};
use crate::wire::reader::PayloadReader;
use crate::wire::writer::PayloadWriter;

pub(crate) fn encode_sig(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Sig(sig) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_u16(u16::from(sig.type_covered));
    w.put_u8(sig.algorithm);
    w.put_u8(sig.labels);
    w.put_u32(sig.original_ttl);
    w.put_u32(sig.expiration);
    w.put_u32(sig.inception);
    w.put_u16(sig.key_tag);
    w.put_name(&sig.signer)?;
    w.put_bytes(&sig.signature);
    Ok(())
}

pub(crate) fn decode_sig(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Sig(Sig {
        type_covered: RecordType::from(r.read_u16()?),
        algorithm: r.read_u8()?,
        labels: r.read_u8()?,
        original_ttl: r.read_u32()?,
        expiration: r.read_u32()?,
        inception: r.read_u32()?,
        key_tag: r.read_u16()?,
        signer: r.read_name()?,
        signature: r.read_rest(),
    }))
}

pub(crate) fn encode_key(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Key(key) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_u16(key.flags);
    w.put_u8(key.protocol);
    w.put_u8(key.algorithm);
    w.put_bytes(&key.key);
    Ok(())
}

pub(crate) fn decode_key(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Key(Key {
        flags: r.read_u16()?,
        protocol: r.read_u8()?,
        algorithm: r.read_u8()?,
        key: r.read_rest(),
    }))
}

pub(crate) fn encode_ds(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Ds(ds) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_u16(ds.key_tag);
    w.put_u8(ds.algorithm);
    w.put_u8(ds.digest_type);
    w.put_bytes(&ds.digest);
    Ok(())
}

pub(crate) fn decode_ds(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Ds(Ds {
        key_tag: r.read_u16()?,
        algorithm: r.read_u8()?,
        digest_type: r.read_u8()?,
        digest: r.read_rest(),
    }))
}

pub(crate) fn encode_nsec(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Nsec(nsec) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_name(&nsec.next)?;
    w.put_bytes(&encode_type_bitmap(&nsec.types));
    Ok(())
}

pub(crate) fn decode_nsec(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    let next = r.read_name()?;
    let types = decode_type_bitmap(&r.read_rest())?;
    Ok(RecordData::Nsec(Nsec { next, types }))
}

fn short_len(bytes: &[u8]) -> Result<u8, CodecError> {
    u8::try_from(bytes.len()).map_err(|_| CodecError::PayloadLengthMismatch {
        declared: bytes.len(),
        available: usize::from(u8::MAX),
    })
}

// Both lengths precede both variable fields.
pub(crate) fn encode_nsec3(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Nsec3(nsec3) = data else {
        return Err(mismatch(record_type, data));
    };
    let salt_len = short_len(&nsec3.salt)?;
    let hash_len = short_len(&nsec3.next_hashed_owner)?;

    w.put_u8(nsec3.algorithm);
    w.put_u8(nsec3.flags);
    w.put_u16(nsec3.iterations);
    w.put_u8(salt_len);
    w.put_u8(hash_len);
    w.put_bytes(&nsec3.salt);
    w.put_bytes(&nsec3.next_hashed_owner);
    w.put_bytes(&encode_type_bitmap(&nsec3.types));
    Ok(())
}

pub(crate) fn decode_nsec3(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    let algorithm = r.read_u8()?;
    let flags = r.read_u8()?;
    let iterations = r.read_u16()?;
    let salt_len = usize::from(r.read_u8()?);
    let hash_len = usize::from(r.read_u8()?);
    let salt = r.read_bytes(salt_len)?;
    let next_hashed_owner = r.read_bytes(hash_len)?;
    let types = decode_type_bitmap(&r.read_rest())?;

    Ok(RecordData::Nsec3(Nsec3 {
        algorithm,
        flags,
        iterations,
        salt,
        next_hashed_owner,
        types,
    }))
}

pub(crate) fn encode_nsec3param(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Nsec3Param(param) = data else {
        return Err(mismatch(record_type, data));
    };
    let salt_len = short_len(&param.salt)?;

    w.put_u8(param.algorithm);
    w.put_u8(param.flags);
    w.put_u16(param.iterations);
    w.put_u8(salt_len);
    w.put_bytes(&param.salt);
    Ok(())
}

pub(crate) fn decode_nsec3param(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    let algorithm = r.read_u8()?;
    let flags = r.read_u8()?;
    let iterations = r.read_u16()?;
    let salt_len = usize::from(r.read_u8()?);

    Ok(RecordData::Nsec3Param(Nsec3Param {
        algorithm,
        flags,
        iterations,
        salt: r.read_bytes(salt_len)?,
    }))
}

pub(crate) fn encode_tlsa(
    record_type: RecordType,
    data: &RecordData,
    w: &mut PayloadWriter,
) -> Result<(), CodecError> {
    let RecordData::Tlsa(tlsa) = data else {
        return Err(mismatch(record_type, data));
    };
    w.put_u8(tlsa.usage);
    w.put_u8(tlsa.selector);
    w.put_u8(tlsa.matching_type);
    w.put_bytes(&tlsa.data);
    Ok(())
}

pub(crate) fn decode_tlsa(
    _record_type: RecordType,
    r: &mut PayloadReader<'_>,
) -> Result<RecordData, CodecError> {
    Ok(RecordData::Tlsa(Tlsa {
        usage: r.read_u8()?,
        selector: r.read_u8()?,
        matching_type: r.read_u8()?,
        data: r.read_rest(),
    }))
}

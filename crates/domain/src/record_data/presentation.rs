use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::DateTime;
use std::fmt;

use crate::RecordType;

pub(crate) fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str(&data_encoding::HEXUPPER.encode(bytes))
}

pub(crate) fn write_base64(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str(&STANDARD.encode(bytes))
}

/// `-` stands for an empty salt.
pub(crate) fn write_salt(f: &mut fmt::Formatter<'_>, salt: &[u8]) -> fmt::Result {
    if salt.is_empty() {
        f.write_str("-")
    } else {
        write_hex(f, salt)
    }
}

pub(crate) fn write_types(f: &mut fmt::Formatter<'_>, types: &[RecordType]) -> fmt::Result {
    for record_type in types {
        write!(f, " {}", record_type)?;
    }
    Ok(())
}

/// RFC 3597 generic form.
pub(crate) fn write_generic(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "\\# {}", bytes.len())?;
    if !bytes.is_empty() {
        f.write_str(" ")?;
        write_hex(f, bytes)?;
    }
    Ok(())
}

/// Signature times print as `YYYYMMDDHHmmSS`.
pub(crate) fn write_signature_time(f: &mut fmt::Formatter<'_>, secs: u32) -> fmt::Result {
    match DateTime::from_timestamp(i64::from(secs), 0) {
        Some(time) => write!(f, "{}", time.format("%Y%m%d%H%M%S")),
        None => write!(f, "{}", secs),
    }
}

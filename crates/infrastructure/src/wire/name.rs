use bytes::BufMut;
use dnsp_record_domain::name::{MAX_LABEL_LEN, MAX_NAME_LEN};
use dnsp_record_domain::{CodecError, DomainName};
use std::str::FromStr;

/// Counted labels ending in a zero byte, no compression.
pub(crate) fn write_labels(name: &DomainName, buf: &mut Vec<u8>) {
    for label in name.labels() {
        buf.put_u8(label.len() as u8);
        buf.put_slice(label);
    }
    buf.put_u8(0);
}

/// `DNS_RPC_NAME`: a length byte followed by the dotted presentation text.
pub(crate) fn write_rpc_name(name: &DomainName, buf: &mut Vec<u8>) -> Result<(), CodecError> {
    let text = name.to_string();
    let len = u8::try_from(text.len()).map_err(|_| {
        CodecError::invalid_name(format!("{} bytes of name text exceed 255", text.len()))
    })?;
    buf.put_u8(len);
    buf.put_slice(text.as_bytes());
    Ok(())
}

/// Reads a counted-label name from the front of `data`, returning the name
/// and the number of bytes it occupied.
pub fn read_labels(data: &[u8]) -> Result<(DomainName, usize), CodecError> {
    let mut labels = Vec::new();
    let mut pos = 0;

    loop {
        let Some(&len) = data.get(pos) else {
            return Err(CodecError::invalid_name("name is missing its terminator"));
        };
        pos += 1;

        if len == 0 {
            break;
        }

        let len = usize::from(len);
        if len > MAX_LABEL_LEN {
            return Err(CodecError::invalid_name(format!(
                "label length {} exceeds {}",
                len, MAX_LABEL_LEN
            )));
        }

        let Some(label) = data.get(pos..pos + len) else {
            return Err(CodecError::invalid_name(format!(
                "label of {} bytes overruns the buffer",
                len
            )));
        };
        labels.push(label.to_vec());
        pos += len;

        if pos >= MAX_NAME_LEN {
            return Err(CodecError::invalid_name(format!(
                "name exceeds {} bytes",
                MAX_NAME_LEN
            )));
        }
    }

    Ok((DomainName::from_labels(labels)?, pos))
}

/// Reads a `DNS_RPC_NAME`. A zero length stands for the root.
pub fn read_rpc_name(data: &[u8]) -> Result<(DomainName, usize), CodecError> {
    let Some(&len) = data.first() else {
        return Err(CodecError::invalid_name("missing name length"));
    };
    let len = usize::from(len);

    let Some(text) = data.get(1..1 + len) else {
        return Err(CodecError::invalid_name(format!(
            "name of {} bytes overruns the buffer",
            len
        )));
    };

    if text.is_empty() {
        return Ok((DomainName::root(), 1));
    }

    let text = std::str::from_utf8(text)
        .map_err(|_| CodecError::invalid_name("name text is not valid UTF-8"))?;
    Ok((DomainName::from_str(text)?, 1 + len))
}

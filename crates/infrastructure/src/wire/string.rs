use bytes::BufMut;
use dnsp_record_domain::char_string::MAX_STRING_LEN;
use dnsp_record_domain::{CharacterString, CodecError};

pub(crate) fn write_string(text: &CharacterString, buf: &mut Vec<u8>) -> Result<(), CodecError> {
    let len = u8::try_from(text.len()).map_err(|_| CodecError::InvalidStringLength {
        declared: text.len(),
        available: MAX_STRING_LEN,
    })?;
    buf.put_u8(len);
    buf.put_slice(text.as_bytes());
    Ok(())
}

/// Reads a length-prefixed string from the front of `data`.
pub(crate) fn read_string(data: &[u8]) -> Result<(CharacterString, usize), CodecError> {
    let Some(&len) = data.first() else {
        return Err(CodecError::InvalidStringLength {
            declared: 1,
            available: 0,
        });
    };
    let len = usize::from(len);

    let Some(bytes) = data.get(1..1 + len) else {
        return Err(CodecError::InvalidStringLength {
            declared: len,
            available: data.len() - 1,
        });
    };
    Ok((CharacterString::new(bytes), 1 + len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_length_past_end() {
        let data = [0xC8, 1, 2, 3, 4, 5];
        assert_eq!(
            read_string(&data),
            Err(CodecError::InvalidStringLength {
                declared: 200,
                available: 5,
            })
        );
    }

    #[test]
    fn test_empty_string_is_one_byte() {
        assert_eq!(read_string(&[0]).unwrap(), (CharacterString::default(), 1));
    }

    #[test]
    fn test_oversized_string_rejected_on_write() {
        let mut buf = Vec::new();
        let result = write_string(&CharacterString::new(vec![b'x'; 256]), &mut buf);

        assert_eq!(
            result,
            Err(CodecError::InvalidStringLength {
                declared: 256,
                available: 255,
            })
        );
        assert!(buf.is_empty());
    }
}

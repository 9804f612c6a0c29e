use dnsp_record_domain::{CodecError, RecordType};

const MAX_WINDOW_BYTES: usize = 32;

/// Encodes types as an RFC 4034 window bitmap. Types come out sorted and
/// deduplicated.
pub fn encode_type_bitmap(types: &[RecordType]) -> Vec<u8> {
    let mut codes: Vec<u16> = types.iter().map(|t| u16::from(*t)).collect();
    codes.sort_unstable();
    codes.dedup();

    let mut out = Vec::new();
    let mut i = 0;
    while i < codes.len() {
        let window = (codes[i] >> 8) as u8;
        let mut bits = [0u8; MAX_WINDOW_BYTES];
        let mut used = 0;

        while i < codes.len() && (codes[i] >> 8) as u8 == window {
            let low = (codes[i] & 0xFF) as usize;
            bits[low / 8] |= 0x80 >> (low % 8);
            used = low / 8 + 1;
            i += 1;
        }

        out.push(window);
        out.push(used as u8);
        out.extend_from_slice(&bits[..used]);
    }
    out
}

pub fn decode_type_bitmap(data: &[u8]) -> Result<Vec<RecordType>, CodecError> {
    let mut types = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let (Some(&window), Some(&len)) = (data.get(pos), data.get(pos + 1)) else {
            return Err(CodecError::PayloadLengthMismatch {
                declared: pos + 2,
                available: data.len(),
            });
        };
        let len = usize::from(len);
        if len == 0 || len > MAX_WINDOW_BYTES {
            return Err(CodecError::PayloadLengthMismatch {
                declared: len,
                available: MAX_WINDOW_BYTES,
            });
        }

        let start = pos + 2;
        let Some(bits) = data.get(start..start + len) else {
            return Err(CodecError::PayloadLengthMismatch {
                declared: start + len,
                available: data.len(),
            });
        };

        for (index, byte) in bits.iter().enumerate() {
            for bit in 0..8 {
                if byte & (0x80 >> bit) != 0 {
                    let code = (u16::from(window) << 8) | (index * 8 + bit) as u16;
                    types.push(RecordType::from(code));
                }
            }
        }
        pos = start + len;
    }

    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4034_example_bitmap() {
        let types = [
            RecordType::A,
            RecordType::MX,
            RecordType::RRSIG,
            RecordType::NSEC,
            RecordType::Unknown(1234),
        ];
        let bitmap = encode_type_bitmap(&types);

        assert_eq!(
            bitmap,
            vec![
                0x00, 0x06, 0x40, 0x01, 0x00, 0x00, 0x00, 0x03, 0x04, 0x1B, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20,
            ]
        );
        assert_eq!(decode_type_bitmap(&bitmap).unwrap(), types.to_vec());
    }

    #[test]
    fn test_unsorted_input_is_canonicalised() {
        let bitmap = encode_type_bitmap(&[RecordType::MX, RecordType::A, RecordType::MX]);
        assert_eq!(
            decode_type_bitmap(&bitmap).unwrap(),
            vec![RecordType::A, RecordType::MX]
        );
    }

    #[test]
    fn test_truncated_window_is_length_mismatch() {
        assert!(matches!(
            decode_type_bitmap(&[0x00, 0x06, 0x40]),
            Err(CodecError::PayloadLengthMismatch { .. })
        ));
        assert!(matches!(
            decode_type_bitmap(&[0x00]),
            Err(CodecError::PayloadLengthMismatch { .. })
        ));
        assert!(matches!(
            decode_type_bitmap(&[0x00, 0x00]),
            Err(CodecError::PayloadLengthMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_bitmap() {
        assert!(encode_type_bitmap(&[]).is_empty());
        assert!(decode_type_bitmap(&[]).unwrap().is_empty());
    }
}

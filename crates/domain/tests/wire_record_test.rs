use chrono::{TimeZone, Utc};
use dnsp_record_domain::wire_record::header::{decode_header, encode_header};
use dnsp_record_domain::{CodecError, RecordFlags, RecordType, WireRecord, HEADER_LEN};

mod helpers;
use helpers::WireRecordBuilder;

#[test]
fn test_header_layout_is_little_endian() {
    let header = encode_header(RecordType::MX, 0xF0, 7, 3600, 0, 0x0102);

    assert_eq!(header.len(), HEADER_LEN);
    assert_eq!(&header[0..2], &[0x02, 0x01]);
    assert_eq!(&header[2..4], &[0x0F, 0x00]);
    assert_eq!(&header[4..8], &[0xF0, 0, 0, 0]);
    assert_eq!(&header[8..12], &[7, 0, 0, 0]);
    assert_eq!(&header[12..16], &[0x10, 0x0E, 0, 0]);
    assert_eq!(&header[16..20], &[0, 0, 0, 0]);
    assert_eq!(&header[20..24], &[0, 0, 0, 0]);
}

#[test]
fn test_header_decodes_what_it_encodes() {
    let bytes = encode_header(RecordType::WINS, 0x8000_0000, 42, 900, 3_600_000, 16);
    let header = decode_header(&bytes).unwrap();

    assert_eq!(header.record_type, RecordType::WINS);
    assert_eq!(header.flags, 0x8000_0000);
    assert_eq!(header.serial, 42);
    assert_eq!(header.ttl_seconds, 900);
    assert_eq!(header.timestamp, 3_600_000);
    assert_eq!(header.data_length, 16);
}

#[test]
fn test_every_short_prefix_is_truncated() {
    let bytes = encode_header(RecordType::A, 0, 0, 60, 0, 4);

    for len in 0..HEADER_LEN {
        assert_eq!(
            decode_header(&bytes[..len]),
            Err(CodecError::TruncatedHeader {
                needed: HEADER_LEN,
                available: len,
            })
        );
    }
}

#[test]
fn test_reserved_word_is_ignored_on_read() {
    let mut bytes = encode_header(RecordType::A, 0, 0, 60, 0, 4).to_vec();
    bytes[20..24].copy_from_slice(&[0xFF; 4]);
    bytes.extend_from_slice(&[1, 2, 3, 4]);

    let record = WireRecord::from_bytes(&bytes).unwrap();
    assert_eq!(record.buffer, vec![1, 2, 3, 4]);
    assert_eq!(&record.to_bytes()[20..24], &[0, 0, 0, 0]);
}

#[test]
fn test_to_bytes_from_bytes() {
    let record = WireRecordBuilder::new()
        .record_type(RecordType::TXT)
        .flags(RecordFlags::RANK_ZONE)
        .serial(12)
        .timestamp(3_700_000)
        .buffer(&[3, b'a', b'b', b'c'])
        .build();

    let bytes = record.to_bytes();
    assert_eq!(bytes.len(), HEADER_LEN + 4);
    assert_eq!(WireRecord::from_bytes(&bytes).unwrap(), record);
}

#[test]
fn test_declared_length_must_match_buffer() {
    let mut bytes = WireRecordBuilder::new().build().to_bytes();
    bytes.push(0);

    assert_eq!(
        WireRecord::from_bytes(&bytes),
        Err(CodecError::PayloadLengthMismatch {
            declared: 4,
            available: 5,
        })
    );

    bytes.truncate(HEADER_LEN + 2);
    assert_eq!(
        WireRecord::from_bytes(&bytes),
        Err(CodecError::PayloadLengthMismatch {
            declared: 4,
            available: 2,
        })
    );
}

#[test]
fn test_new_derives_data_length() {
    let record = WireRecord::new(RecordType::AAAA, 60, vec![0; 16]).unwrap();

    assert_eq!(record.data_length, 16);
    assert_eq!(record.flags, 0);
    assert_eq!(record.serial, 0);
    assert!(record.is_static());
    assert!(WireRecord::new(RecordType::NULL, 60, vec![0; 70_000]).is_err());
}

#[test]
fn test_flags_rank_and_bits() {
    let flags = RecordFlags::from(RecordFlags::FLAG_ZONE_ROOT | RecordFlags::RANK_ZONE);

    assert_eq!(u32::from(flags.rank()), RecordFlags::RANK_ZONE);
    assert!(flags.is_zone_rank());
    assert!(flags.contains(RecordFlags::FLAG_ZONE_ROOT));
    assert!(!flags.contains(RecordFlags::FLAG_CACHE_DATA));
    assert!(!flags.is_cached());
    assert!(RecordFlags::from(RecordFlags::RANK_CACHE_A_ANSWER).is_cached());
    assert_eq!(flags.to_string(), "0x400000F0");
}

#[test]
fn test_aging_timestamp_conversion() {
    let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let timestamp = WireRecord::timestamp_from(time);

    let record = WireRecordBuilder::new().timestamp(timestamp).build();
    assert!(!record.is_static());
    assert_eq!(record.aging_time(), Some(time));
}

#[test]
fn test_static_record_has_no_aging_time() {
    let record = WireRecordBuilder::new().build();
    assert_eq!(record.aging_time(), None);
    assert_eq!(
        WireRecord::timestamp_from(Utc.with_ymd_and_hms(1500, 1, 1, 0, 0, 0).unwrap()),
        0
    );
}

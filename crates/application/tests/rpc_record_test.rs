use dnsp_record_application::dto::RpcRecord;
use dnsp_record_domain::{CodecError, RecordType, WireRecord};

fn sample_wire() -> WireRecord {
    WireRecord {
        data_length: 3,
        record_type: RecordType::WINSR,
        flags: 0xF0,
        serial: 9,
        ttl_seconds: 1200,
        timestamp: 3_700_000,
        buffer: vec![1, 2, 3],
    }
}

#[test]
fn test_from_wire_record_copies_every_field() {
    let rpc = RpcRecord::from(sample_wire());

    assert_eq!(rpc.data_length, 3);
    assert_eq!(rpc.record_type, 0xFF02);
    assert_eq!(rpc.flags, 0xF0);
    assert_eq!(rpc.serial, 9);
    assert_eq!(rpc.ttl_seconds, 1200);
    assert_eq!(rpc.timestamp, 3_700_000);
    assert_eq!(rpc.buffer, vec![1, 2, 3]);
}

#[test]
fn test_back_to_wire_record() {
    let rpc = RpcRecord::from(sample_wire());
    assert_eq!(WireRecord::try_from(rpc).unwrap(), sample_wire());
}

#[test]
fn test_length_mismatch_is_rejected() {
    let mut rpc = RpcRecord::from(sample_wire());
    rpc.buffer.push(4);

    assert_eq!(
        WireRecord::try_from(rpc),
        Err(CodecError::PayloadLengthMismatch {
            declared: 3,
            available: 4,
        })
    );
}

#[test]
fn test_json_uses_protocol_field_names() {
    let json = RpcRecord::from(sample_wire()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["type"], 0xFF02);
    assert_eq!(value["data_length"], 3);
    assert_eq!(value["buffer"], serde_json::json!([1, 2, 3]));

    let parsed: RpcRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, RpcRecord::from(sample_wire()));
}

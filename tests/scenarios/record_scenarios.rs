use dnsp_record_application::dto::RpcRecord;
use dnsp_record_application::ports::{RecordCodec, RecordTextParser};
use dnsp_record_application::use_cases::{
    DecodeRecordUseCase, NewRecordFromStructuredUseCase, NewRecordFromTextUseCase,
};
use dnsp_record_domain::{
    CliOverrides, CodecError, Config, NameEncoding, RecordClass, RecordData, RecordType,
    ResourceRecord, WireRecord, HEADER_LEN,
};
use dnsp_record_infrastructure::hickory::record_from_hickory;
use dnsp_record_infrastructure::text::ZoneTextParser;
use dnsp_record_infrastructure::wire::WireRecordCodec;
use std::io::Write;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::Arc;

struct Pipeline {
    from_text: NewRecordFromTextUseCase,
    from_structured: NewRecordFromStructuredUseCase,
    decode: DecodeRecordUseCase,
}

impl Pipeline {
    fn from_config(config: &Config) -> Self {
        let codec: Arc<dyn RecordCodec> = Arc::new(WireRecordCodec::from_config(&config.codec));
        let parser: Arc<dyn RecordTextParser> =
            Arc::new(ZoneTextParser::from_config(&config.codec));

        Self {
            from_text: NewRecordFromTextUseCase::new(parser, codec.clone()),
            from_structured: NewRecordFromStructuredUseCase::new(codec.clone()),
            decode: DecodeRecordUseCase::new(codec),
        }
    }

    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[test]
fn test_a_record_from_text() {
    let wire = Pipeline::default()
        .from_text
        .execute(RecordType::A, 3600, "1.2.3.4")
        .unwrap();

    assert_eq!(wire.ttl_seconds, 3600);
    assert_eq!(wire.data_length, 4);
    assert_eq!(wire.buffer, vec![0x01, 0x02, 0x03, 0x04]);

    let bytes = wire.to_bytes();
    assert_eq!(
        bytes,
        vec![
            0x04, 0x00, 0x01, 0x00, 0, 0, 0, 0, 0, 0, 0, 0, 0x10, 0x0E, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0x01, 0x02, 0x03, 0x04,
        ]
    );
}

#[test]
fn test_mx_record_from_text() {
    let wire = Pipeline::default()
        .from_text
        .execute(RecordType::MX, 300, "10 mail.example.com.")
        .unwrap();

    let mut expected = vec![0x00, 0x0A];
    expected.extend_from_slice(b"\x04mail\x07example\x03com\x00");
    assert_eq!(wire.buffer, expected);
    assert_eq!(usize::from(wire.data_length), expected.len());
}

#[test]
fn test_text_to_wire_and_back() {
    let pipeline = Pipeline::default();
    let cases = [
        (RecordType::SOA, "ns1.example.com. hostmaster.example.com. 1 900 600 86400 3600"),
        (RecordType::TXT, "\"v=spf1 include:example.net -all\""),
        (RecordType::SRV, "0 100 389 dc1.example.com."),
        (RecordType::WINS, "LOCAL L3 C1200 10.1.1.1"),
        (RecordType::WINSR, "corp.example.com."),
        (RecordType::NSEC, "next.example.com. A NS SOA RRSIG NSEC DNSKEY"),
        (RecordType::ISDN, "150862028003217 004"),
    ];

    for (record_type, text) in cases {
        let wire = pipeline.from_text.execute(record_type, 600, text).unwrap();
        let decoded = pipeline.decode.execute(&wire.to_bytes()).unwrap();

        assert_eq!(decoded.record_type, record_type);
        assert_eq!(decoded.ttl, 600);
        assert_eq!(
            pipeline.from_text.execute(record_type, 600, &decoded.data.to_string()),
            Ok(wire),
            "{} '{}'",
            record_type,
            text
        );
    }
}

#[test]
fn test_zone_line_to_rpc_record_json() {
    let wire = Pipeline::default()
        .from_text
        .execute_line("www.example.com. 120 IN CNAME host.example.com.")
        .unwrap();

    let json = RpcRecord::from(wire.clone()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["type"], 5);
    assert_eq!(value["ttl_seconds"], 120);
    assert_eq!(value["data_length"], wire.buffer.len());

    let back: RpcRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(WireRecord::try_from(back), Ok(wire));
}

#[test]
fn test_structured_record_rejects_other_classes() {
    let record = ResourceRecord::new(
        "example.com.".parse().unwrap(),
        RecordClass::HS,
        RecordType::A,
        60,
        RecordData::A(Ipv4Addr::new(192, 0, 2, 1)),
    );

    assert_eq!(
        Pipeline::default().from_structured.execute(&record),
        Err(CodecError::UnsupportedClass(RecordClass::HS))
    );
}

#[test]
fn test_zone_line_with_chaos_class_is_rejected() {
    assert_eq!(
        Pipeline::default()
            .from_text
            .execute_line("version.bind. CH TXT \"9.18\""),
        Err(CodecError::UnsupportedClass(RecordClass::CH))
    );
}

#[test]
fn test_unparsable_text() {
    assert!(matches!(
        Pipeline::default()
            .from_text
            .execute(RecordType::AAAA, 3600, "not-an-address"),
        Err(CodecError::UnparsableText(_))
    ));
}

#[test]
fn test_generic_text_must_fit_the_type() {
    let pipeline = Pipeline::default();

    assert!(matches!(
        pipeline.from_text.execute(RecordType::A, 60, r"\# 3 010203"),
        Err(CodecError::UnparsableText(_))
    ));

    let wire = pipeline
        .from_text
        .execute(RecordType::A, 60, r"\# 4 01020304")
        .unwrap();
    assert_eq!(wire.buffer, vec![0x01, 0x02, 0x03, 0x04]);
    assert_eq!(
        pipeline.decode.execute_record(&wire).unwrap().data,
        RecordData::A(Ipv4Addr::new(1, 2, 3, 4))
    );
}

#[test]
fn test_oversized_text_string_is_unparsable() {
    let text = format!("\"{}\"", "x".repeat(256));

    assert!(matches!(
        Pipeline::default().from_text.execute(RecordType::TXT, 60, &text),
        Err(CodecError::UnparsableText(_))
    ));
}

#[test]
fn test_hickory_record_through_codec() {
    use hickory_proto::rr::rdata::MX;
    use hickory_proto::rr::{Name, RData, Record};

    let hickory = Record::from_rdata(
        Name::from_str("example.com.").unwrap(),
        900,
        RData::MX(MX::new(5, Name::from_str("MX1.Example.com.").unwrap())),
    );
    let structured = record_from_hickory(&hickory).unwrap();

    let pipeline = Pipeline::default();
    let wire = pipeline.from_structured.execute(&structured).unwrap();
    let decoded = pipeline.decode.execute_record(&wire).unwrap();

    assert_eq!(wire.ttl_seconds, 900);
    assert!(decoded.owner.is_root());
    assert_eq!(decoded.data.to_string(), "5 mx1.example.com.");
}

#[test]
fn test_truncated_input() {
    let pipeline = Pipeline::default();
    let bytes = pipeline
        .from_text
        .execute(RecordType::A, 60, "192.0.2.1")
        .unwrap()
        .to_bytes();

    assert_eq!(
        pipeline.decode.execute(&bytes[..HEADER_LEN - 1]),
        Err(CodecError::TruncatedHeader {
            needed: HEADER_LEN,
            available: HEADER_LEN - 1,
        })
    );
    assert!(matches!(
        pipeline.decode.execute(&bytes[..HEADER_LEN + 2]),
        Err(CodecError::PayloadLengthMismatch { .. })
    ));
}

#[test]
fn test_config_file_selects_rpc_names() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[codec]\nname_encoding = \"rpc-name\"\ndefault_ttl = 60\n\n[logging]\nlevel = \"warn\""
    )
    .unwrap();

    let config = Config::load(file.path().to_str(), CliOverrides::default()).unwrap();
    assert_eq!(config.codec.name_encoding, NameEncoding::RpcName);

    let pipeline = Pipeline::from_config(&config);
    let wire = pipeline
        .from_text
        .execute_line("alias.example.com. CNAME ns1.example.")
        .unwrap();

    assert_eq!(wire.ttl_seconds, 60);
    assert_eq!(wire.buffer, b"\x0cns1.example.".to_vec());
    assert_eq!(
        pipeline.decode.execute_record(&wire).unwrap().data.to_string(),
        "ns1.example."
    );
}

#[test]
fn test_cli_overrides_win_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[codec]\nname_encoding = \"rpc-name\"").unwrap();

    let overrides = CliOverrides {
        name_encoding: Some(NameEncoding::Labels),
        ..CliOverrides::default()
    };
    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.codec.name_encoding, NameEncoding::Labels);
}

use dnsp_record_domain::{
    CodecError, Preference, RecordClass, RecordData, RecordType, Soa,
};
use dnsp_record_infrastructure::hickory::record_from_hickory;
use hickory_proto::rr::rdata::{A, CNAME, HINFO, MX, NULL, SOA, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;

mod helpers;
use helpers::{name, strings};

fn hickory_name(text: &str) -> Name {
    Name::from_str(text).unwrap()
}

fn make_record(rdata: RData) -> Record {
    Record::from_rdata(hickory_name("www.example.com."), 300, rdata)
}

#[test]
fn test_address_record_keeps_owner_class_and_ttl() {
    let record = record_from_hickory(&make_record(RData::A(A(Ipv4Addr::new(192, 0, 2, 7)))))
        .unwrap();

    assert_eq!(record.owner, name("www.example.com."));
    assert_eq!(record.class, RecordClass::IN);
    assert_eq!(record.record_type, RecordType::A);
    assert_eq!(record.ttl, 300);
    assert_eq!(record.data, RecordData::A(Ipv4Addr::new(192, 0, 2, 7)));
}

#[test]
fn test_names_are_lowercased() {
    let record = record_from_hickory(&make_record(RData::CNAME(CNAME(hickory_name(
        "Target.EXAMPLE.com.",
    )))))
    .unwrap();

    assert_eq!(record.data, RecordData::Name(name("target.example.com.")));
}

#[test]
fn test_mx_and_soa_map_field_by_field() {
    let mx = record_from_hickory(&make_record(RData::MX(MX::new(
        10,
        hickory_name("mail.example.com."),
    ))))
    .unwrap();
    assert_eq!(
        mx.data,
        RecordData::Preference(Preference {
            preference: 10,
            exchange: name("mail.example.com."),
        })
    );

    let soa = record_from_hickory(&make_record(RData::SOA(SOA::new(
        hickory_name("ns1.example.com."),
        hickory_name("hostmaster.example.com."),
        7,
        3600,
        900,
        604800,
        300,
    ))))
    .unwrap();
    assert_eq!(
        soa.data,
        RecordData::Soa(Soa {
            serial: 7,
            refresh: 3600,
            retry: 900,
            expire: 604800,
            minimum: 300,
            primary_server: name("ns1.example.com."),
            administrator: name("hostmaster.example.com."),
        })
    );
}

#[test]
fn test_txt_strings() {
    let record = record_from_hickory(&make_record(RData::TXT(TXT::new(vec![
        "v=spf1 -all".to_string(),
        "second".to_string(),
    ]))))
    .unwrap();

    assert_eq!(record.data, strings(&["v=spf1 -all", "second"]));
}

#[test]
fn test_other_types_go_through_wire_form() {
    let hinfo = record_from_hickory(&make_record(RData::HINFO(HINFO::new(
        "INTEL-386".to_string(),
        "Windows".to_string(),
    ))))
    .unwrap();
    assert_eq!(hinfo.record_type, RecordType::HINFO);
    assert_eq!(hinfo.data, strings(&["INTEL-386", "Windows"]));

    let null = record_from_hickory(&make_record(RData::NULL(NULL::with(vec![1, 2, 3])))).unwrap();
    assert_eq!(null.data, RecordData::Null(vec![1, 2, 3]));
}

#[test]
fn test_class_is_carried_for_the_codec_to_judge() {
    let mut hickory = make_record(RData::A(A(Ipv4Addr::LOCALHOST)));
    hickory.set_dns_class(DNSClass::CH);

    let record = record_from_hickory(&hickory).unwrap();

    assert_eq!(record.class, RecordClass::CH);
}

#[test]
fn test_divergent_layouts_are_unsupported() {
    let wks = make_record(RData::Unknown {
        code: hickory_proto::rr::RecordType::Unknown(11),
        rdata: NULL::with(vec![192, 0, 2, 1, 6, 0]),
    });

    assert!(matches!(
        record_from_hickory(&wks),
        Err(CodecError::UnsupportedRecord(_))
    ));
}

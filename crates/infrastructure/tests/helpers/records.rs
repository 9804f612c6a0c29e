#![allow(dead_code)]
use dnsp_record_domain::record_data::{PROTOCOL_TCP, WINS_FLAG_LOCAL};
use dnsp_record_domain::{
    Atma, AtmaFormat, CharacterString, DomainName, Ds, Key, MailError, Naptr, Nsec, Nsec3,
    Nsec3Param, Nxt, Preference, RecordData, RecordType, ResourceRecord, Sig, Soa, Srv, Tlsa,
    Wins, WinsR, Wks,
};
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn name(text: &str) -> DomainName {
    text.parse().unwrap()
}

pub fn rooted(record_type: RecordType, data: RecordData) -> ResourceRecord {
    ResourceRecord::rooted(record_type, 3600, data)
}

pub fn strings(values: &[&str]) -> RecordData {
    RecordData::Strings(values.iter().map(|v| CharacterString::from(*v)).collect())
}

/// One record of every known type, each with data that survives an
/// encode/decode cycle unchanged.
pub fn sample_records() -> Vec<ResourceRecord> {
    use RecordType as T;

    let mut records = vec![
        rooted(
            T::ZERO,
            RecordData::Tombstone {
                entombed_time: 0x01D9_8A3B_4C5D_6E7F,
            },
        ),
        rooted(T::A, RecordData::A(Ipv4Addr::new(192, 0, 2, 1))),
        rooted(
            T::AAAA,
            RecordData::Aaaa("2001:db8::1".parse::<Ipv6Addr>().unwrap()),
        ),
    ];

    for name_type in [T::NS, T::MD, T::MF, T::CNAME, T::MB, T::MG, T::MR, T::PTR, T::DNAME] {
        records.push(rooted(name_type, RecordData::Name(name("target.example.com."))));
    }

    records.extend([
        rooted(
            T::SOA,
            RecordData::Soa(Soa {
                serial: 2024010101,
                refresh: 900,
                retry: 600,
                expire: 86400,
                minimum: 3600,
                primary_server: name("ns1.example.com."),
                administrator: name("hostmaster.example.com."),
            }),
        ),
        rooted(T::NULL, RecordData::Null(vec![0x01, 0x02, 0x03])),
        rooted(
            T::WKS,
            RecordData::Wks(Wks {
                address: Ipv4Addr::new(192, 0, 2, 25),
                protocol: PROTOCOL_TCP,
                services: CharacterString::from("smtp ftp"),
            }),
        ),
        rooted(T::HINFO, strings(&["INTEL-386", "Windows"])),
        rooted(
            T::MINFO,
            RecordData::MailError(MailError {
                mailbox: name("admin.example.com."),
                error_mailbox: name("errors.example.com."),
            }),
        ),
        rooted(
            T::MX,
            RecordData::Preference(Preference {
                preference: 10,
                exchange: name("mail.example.com."),
            }),
        ),
        rooted(T::TXT, strings(&["v=spf1 -all", "second string"])),
        rooted(
            T::RP,
            RecordData::MailError(MailError {
                mailbox: name("louie.trantor.umd.edu."),
                error_mailbox: name("lam1.people.umd.edu."),
            }),
        ),
        rooted(
            T::AFSDB,
            RecordData::Preference(Preference {
                preference: 1,
                exchange: name("afs.example.com."),
            }),
        ),
        rooted(T::X25, strings(&["311061700956"])),
        rooted(T::ISDN, strings(&["150862028003217", "004"])),
        rooted(
            T::RT,
            RecordData::Preference(Preference {
                preference: 2,
                exchange: name("relay.example.com."),
            }),
        ),
        rooted(T::SIG, RecordData::Sig(sample_sig(T::A))),
        rooted(
            T::KEY,
            RecordData::Key(Key {
                flags: 256,
                protocol: 3,
                algorithm: 5,
                key: vec![0x03, 0x01, 0x00, 0x01, 0xAB, 0xCD],
            }),
        ),
        rooted(
            T::NXT,
            RecordData::Nxt(Nxt {
                next: name("next.example.com."),
                types: vec![T::A, T::MX, T::NXT],
            }),
        ),
        rooted(
            T::SRV,
            RecordData::Srv(Srv {
                priority: 0,
                weight: 5,
                port: 389,
                target: name("dc1.example.com."),
            }),
        ),
        rooted(
            T::ATMA,
            RecordData::Atma(Atma {
                format: AtmaFormat::E164,
                address: b"15551234567".to_vec(),
            }),
        ),
        rooted(
            T::NAPTR,
            RecordData::Naptr(Naptr {
                order: 100,
                preference: 10,
                flags: CharacterString::from("S"),
                service: CharacterString::from("SIP+D2U"),
                regexp: CharacterString::from(""),
                replacement: name("_sip._udp.example.com."),
            }),
        ),
        rooted(
            T::DS,
            RecordData::Ds(Ds {
                key_tag: 60485,
                algorithm: 5,
                digest_type: 1,
                digest: vec![0x2B, 0xB1, 0x83, 0xAF, 0x5F, 0x22],
            }),
        ),
        rooted(T::RRSIG, RecordData::Sig(sample_sig(T::MX))),
        rooted(
            T::NSEC,
            RecordData::Nsec(Nsec {
                next: name("host.example.com."),
                types: vec![T::A, T::MX, T::RRSIG, T::NSEC],
            }),
        ),
        rooted(
            T::DNSKEY,
            RecordData::Key(Key {
                flags: 257,
                protocol: 3,
                algorithm: 8,
                key: vec![0xAA; 32],
            }),
        ),
        rooted(T::DHCID, RecordData::Dhcid(vec![0x00, 0x01, 0x01, 0x63, 0x6F])),
        rooted(
            T::NSEC3,
            RecordData::Nsec3(Nsec3 {
                algorithm: 1,
                flags: 1,
                iterations: 12,
                salt: vec![0xAA, 0xBB, 0xCC, 0xDD],
                next_hashed_owner: vec![0x5A; 20],
                types: vec![T::A, T::RRSIG],
            }),
        ),
        rooted(
            T::NSEC3PARAM,
            RecordData::Nsec3Param(Nsec3Param {
                algorithm: 1,
                flags: 0,
                iterations: 12,
                salt: vec![0xAA, 0xBB, 0xCC, 0xDD],
            }),
        ),
        rooted(
            T::TLSA,
            RecordData::Tlsa(Tlsa {
                usage: 3,
                selector: 1,
                matching_type: 1,
                data: vec![0x0D, 0x6F, 0xCE, 0x13],
            }),
        ),
        rooted(
            T::WINS,
            RecordData::Wins(Wins {
                mapping_flag: WINS_FLAG_LOCAL,
                ..Wins::new(vec![Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)])
            }),
        ),
        rooted(T::WINSR, RecordData::WinsR(WinsR::new(name("example.com.")))),
    ]);

    records
}

pub fn sample_sig(type_covered: RecordType) -> Sig {
    Sig {
        type_covered,
        algorithm: 5,
        labels: 3,
        original_ttl: 86400,
        expiration: 1_700_000_000,
        inception: 1_697_408_000,
        key_tag: 2642,
        signer: name("example.com."),
        signature: vec![0x10, 0x20, 0x30, 0x40, 0x50],
    }
}

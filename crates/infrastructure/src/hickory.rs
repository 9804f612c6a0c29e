//! Conversion from `hickory-proto` records, so resolver output and parsed
//! zone files can be fed to the record codec.

use dnsp_record_domain::{
    CharacterString, CodecError, DomainName, NameEncoding, Preference, RecordClass, RecordData,
    RecordType, ResourceRecord, Soa, Srv,
};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use tracing::debug;

use crate::wire::decode_payload;

/// Builds a structured record from a hickory record. Names are lowercased.
///
/// Types whose management-protocol payload departs from the RFC rdata
/// layout, other than SOA, are rejected.
pub fn record_from_hickory(record: &Record) -> Result<ResourceRecord, CodecError> {
    let record_type = RecordType::from(u16::from(record.record_type()));
    let class = RecordClass::from(u16::from(record.dns_class()));
    let owner = domain_name(record.name())?;

    let data = match record.data() {
        RData::A(a) => RecordData::A(a.0),
        RData::AAAA(aaaa) => RecordData::Aaaa(aaaa.0),
        RData::CNAME(cname) => RecordData::Name(domain_name(&cname.0)?),
        RData::NS(ns) => RecordData::Name(domain_name(&ns.0)?),
        RData::PTR(ptr) => RecordData::Name(domain_name(&ptr.0)?),
        RData::MX(mx) => RecordData::Preference(Preference {
            preference: mx.preference(),
            exchange: domain_name(mx.exchange())?,
        }),
        // hickory stores the SOA timers as i32; the cast restores the wire value.
        RData::SOA(soa) => RecordData::Soa(Soa {
            serial: soa.serial(),
            refresh: soa.refresh() as u32,
            retry: soa.retry() as u32,
            expire: soa.expire() as u32,
            minimum: soa.minimum(),
            primary_server: domain_name(soa.mname())?,
            administrator: domain_name(soa.rname())?,
        }),
        RData::SRV(srv) => RecordData::Srv(Srv {
            priority: srv.priority(),
            weight: srv.weight(),
            port: srv.port(),
            target: domain_name(srv.target())?,
        }),
        RData::TXT(txt) => RecordData::Strings(
            txt.txt_data()
                .iter()
                .map(|text| CharacterString::new(text.to_vec()))
                .collect(),
        ),
        other => from_rdata_bytes(record_type, other)?,
    };

    Ok(ResourceRecord::new(
        owner,
        class,
        record_type,
        record.ttl(),
        data,
    ))
}

fn from_rdata_bytes(record_type: RecordType, rdata: &RData) -> Result<RecordData, CodecError> {
    if !record_type.shares_rfc_layout() {
        return Err(CodecError::UnsupportedRecord(format!(
            "{} records cannot be converted from their RFC rdata",
            record_type
        )));
    }

    let mut buf = Vec::new();
    let mut encoder = BinEncoder::new(&mut buf);
    encoder.set_canonical_form(true);
    rdata.emit(&mut encoder).map_err(|e| {
        CodecError::UnsupportedRecord(format!("failed to serialize {} rdata: {}", record_type, e))
    })?;

    debug!(record_type = %record_type, length = buf.len(), "Converting rdata through wire form");
    decode_payload(record_type, &buf, NameEncoding::Labels)
}

fn domain_name(name: &Name) -> Result<DomainName, CodecError> {
    DomainName::from_labels(name.to_lowercase().iter().map(<[u8]>::to_vec))
}

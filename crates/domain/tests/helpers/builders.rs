#![allow(dead_code)]
use dnsp_record_domain::{DomainName, RecordClass, RecordData, RecordType, ResourceRecord, WireRecord};
use std::net::Ipv4Addr;

pub fn name(text: &str) -> DomainName {
    text.parse().unwrap()
}

pub struct ResourceRecordBuilder {
    owner: DomainName,
    class: RecordClass,
    record_type: RecordType,
    ttl: u32,
    data: RecordData,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            owner: DomainName::root(),
            class: RecordClass::IN,
            record_type: RecordType::A,
            ttl: 3600,
            data: RecordData::A(Ipv4Addr::new(192, 0, 2, 1)),
        }
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.owner = name(owner);
        self
    }

    pub fn class(mut self, class: RecordClass) -> Self {
        self.class = class;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn data(mut self, record_type: RecordType, data: RecordData) -> Self {
        self.record_type = record_type;
        self.data = data;
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(self.owner, self.class, self.record_type, self.ttl, self.data)
    }
}

pub struct WireRecordBuilder {
    record_type: RecordType,
    flags: u32,
    serial: u32,
    ttl_seconds: u32,
    timestamp: u32,
    buffer: Vec<u8>,
}

impl WireRecordBuilder {
    pub fn new() -> Self {
        Self {
            record_type: RecordType::A,
            flags: 0,
            serial: 0,
            ttl_seconds: 3600,
            timestamp: 0,
            buffer: vec![192, 0, 2, 1],
        }
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn serial(mut self, serial: u32) -> Self {
        self.serial = serial;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl_seconds = ttl;
        self
    }

    pub fn timestamp(mut self, timestamp: u32) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn buffer(mut self, buffer: &[u8]) -> Self {
        self.buffer = buffer.to_vec();
        self
    }

    pub fn build(self) -> WireRecord {
        WireRecord {
            data_length: self.buffer.len() as u16,
            record_type: self.record_type,
            flags: self.flags,
            serial: self.serial,
            ttl_seconds: self.ttl_seconds,
            timestamp: self.timestamp,
            buffer: self.buffer,
        }
    }
}

#![allow(dead_code)]

use dnsp_record_application::ports::{RecordCodec, RecordTextParser};
use dnsp_record_domain::{
    CodecError, DomainName, RecordClass, RecordData, RecordType, ResourceRecord, WireRecord,
};
use std::net::Ipv4Addr;
use std::sync::Mutex;

/// Records every structured value it is asked to encode and returns a fixed
/// wire record or error.
pub struct MockRecordCodec {
    encoded: Mutex<Vec<ResourceRecord>>,
    encode_result: Result<WireRecord, CodecError>,
    decode_result: Result<ResourceRecord, CodecError>,
}

impl MockRecordCodec {
    pub fn new() -> Self {
        Self {
            encoded: Mutex::new(Vec::new()),
            encode_result: Ok(WireRecord::new(RecordType::A, 3600, vec![1, 2, 3, 4]).unwrap()),
            decode_result: Ok(ResourceRecord::rooted(
                RecordType::A,
                3600,
                RecordData::A(Ipv4Addr::new(1, 2, 3, 4)),
            )),
        }
    }

    pub fn failing_encode(mut self, error: CodecError) -> Self {
        self.encode_result = Err(error);
        self
    }

    pub fn failing_decode(mut self, error: CodecError) -> Self {
        self.decode_result = Err(error);
        self
    }

    pub fn encoded(&self) -> Vec<ResourceRecord> {
        self.encoded.lock().unwrap().clone()
    }
}

impl RecordCodec for MockRecordCodec {
    fn encode(&self, record: &ResourceRecord) -> Result<WireRecord, CodecError> {
        self.encoded.lock().unwrap().push(record.clone());
        self.encode_result.clone()
    }

    fn decode(&self, _bytes: &[u8]) -> Result<ResourceRecord, CodecError> {
        self.decode_result.clone()
    }

    fn decode_record(&self, _record: &WireRecord) -> Result<ResourceRecord, CodecError> {
        self.decode_result.clone()
    }
}

/// Accepts only `A` rdata that parses as an IPv4 address, and lines of the
/// form `<owner> <ttl> IN A <address>`.
pub struct MockTextParser;

impl RecordTextParser for MockTextParser {
    fn parse_rdata(&self, record_type: RecordType, text: &str) -> Result<RecordData, CodecError> {
        match record_type {
            RecordType::A => text
                .parse::<Ipv4Addr>()
                .map(RecordData::A)
                .map_err(|e| CodecError::unparsable(e.to_string())),
            other => Err(CodecError::unparsable(format!("mock cannot parse {}", other))),
        }
    }

    fn parse_line(&self, line: &str) -> Result<ResourceRecord, CodecError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [owner, ttl, "IN", "A", address] = fields.as_slice() else {
            return Err(CodecError::unparsable(line));
        };

        let owner: DomainName = owner.parse()?;
        let ttl = ttl.parse().map_err(|_| CodecError::unparsable(*ttl))?;
        let data = self.parse_rdata(RecordType::A, address)?;
        Ok(ResourceRecord::new(owner, RecordClass::IN, RecordType::A, ttl, data))
    }
}

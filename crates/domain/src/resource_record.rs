use std::fmt;

use crate::{DomainName, RecordClass, RecordData, RecordType};

/// A resource record in structured form, independent of any wire layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub owner: DomainName,

    pub class: RecordClass,

    pub record_type: RecordType,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(
        owner: DomainName,
        class: RecordClass,
        record_type: RecordType,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Self {
            owner,
            class,
            record_type,
            ttl,
            data,
        }
    }

    /// A record owned by the root in class IN, which is what a
    /// `DNS_RPC_RECORD` can describe on its own.
    pub fn rooted(record_type: RecordType, ttl: u32, data: RecordData) -> Self {
        Self::new(DomainName::root(), RecordClass::IN, record_type, ttl, data)
    }

    pub fn is_tombstone(&self) -> bool {
        self.record_type == RecordType::ZERO
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.owner, self.ttl, self.class, self.record_type, self.data
        )
    }
}

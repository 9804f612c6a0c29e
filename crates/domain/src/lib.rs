//! DNSP Record Domain Layer
pub mod char_string;
pub mod config;
pub mod errors;
pub mod name;
pub mod record_class;
pub mod record_data;
pub mod record_type;
pub mod resource_record;
pub mod wire_record;

pub use char_string::CharacterString;
pub use config::{CliOverrides, CodecConfig, Config, ConfigError, LoggingConfig, NameEncoding};
pub use errors::CodecError;
pub use name::DomainName;
pub use record_class::RecordClass;
pub use record_data::{
    Atma, AtmaFormat, Ds, Key, MailError, Naptr, Nsec, Nsec3, Nsec3Param, Nxt, Preference,
    RecordData, Sig, Soa, Srv, Tlsa, Wins, WinsR, Wks,
};
pub use record_type::{PayloadFamily, RecordType};
pub use resource_record::ResourceRecord;
pub use wire_record::{RecordFlags, RecordHeader, WireRecord, HEADER_LEN};

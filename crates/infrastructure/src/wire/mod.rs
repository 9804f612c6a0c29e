mod bitmap;
mod codec;
mod dispatch;
mod name;
mod payload;
mod reader;
mod string;
mod writer;

pub use bitmap::{decode_type_bitmap, encode_type_bitmap};
pub use codec::WireRecordCodec;
pub use dispatch::{payload_codec, PayloadCodec};
pub use dnsp_record_domain::wire_record::header::{decode_header, encode_header};
pub use name::{read_labels, read_rpc_name};
pub use payload::{decode_payload, encode_payload};

mod record_codec;
mod record_text_parser;

pub use record_codec::RecordCodec;
pub use record_text_parser::RecordTextParser;

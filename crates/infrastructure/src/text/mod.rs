mod lexer;
mod rdata;
mod zone_line;

pub use lexer::tokenize;
pub use rdata::parse_rdata_tokens;
pub use zone_line::{parse_time, ZoneTextParser};

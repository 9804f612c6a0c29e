pub mod codec;
pub mod errors;
pub mod logging;
pub mod root;

pub use codec::{CodecConfig, NameEncoding};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};

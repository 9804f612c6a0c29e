//! DNSP Record Infrastructure: wire codec, zone text parser, hickory source
pub mod hickory;
pub mod text;
pub mod wire;

//! DNSP Record Application Layer
pub mod dto;
pub mod ports;
pub mod use_cases;

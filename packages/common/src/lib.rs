//! Common infrastructure for the jwtgen workspace
//!
//! Shared between the issuance engine and the bulk generator:
//! - Structured logging setup (`env_logger` behind the `log` facade)
//! - Secret-safe fingerprints for log lines

pub mod logging;

pub use logging::LoggingTransformer;

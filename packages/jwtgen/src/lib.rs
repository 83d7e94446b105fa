//! Bulk JWS/JWE token generator for load-testing fixtures
//!
//! Reads key files from a secrets directory, issues `count` tokens per
//! enabled algorithm with [`jwtgen_jwt`], and writes one file per algorithm
//! with one token per line.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod secrets;

pub use batch::{generate_tokens, write_tokens};
pub use cli::Cli;
pub use config::GeneratorConfig;
pub use error::{BatchError, ConfigError, GeneratorError, GeneratorResult, SecretsError};
pub use generator::{run, BatchReport};

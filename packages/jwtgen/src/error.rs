//! Error types for the generator binary

use std::path::PathBuf;

use jwtgen_jwt::{TokenAlgorithm, TokenError};

/// Configuration could not be assembled
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid JSON for [`GeneratorConfig`](crate::GeneratorConfig)
    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// JSON error with line and column
        #[source]
        source: serde_json::Error,
    },
    /// Settings no run can satisfy, such as a zero count
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Key material could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum SecretsError {
    /// The key file is missing, unreadable or not UTF-8
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Key file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The engine rejected the key file's content
    #[error("Invalid key in {}: {source}", path.display())]
    Key {
        /// Key file path
        path: PathBuf,
        /// Engine error, always `Configuration`
        #[source]
        source: TokenError,
    },
}

/// A batch failed to generate or persist
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// Issuing one token failed
    #[error("Token {index} failed: {source}")]
    Token {
        /// Zero-based position of the token in the batch
        index: usize,
        /// Engine error
        #[source]
        source: TokenError,
    },
    /// A worker generator could not be forked
    #[error("Random source error: {0}")]
    Random(#[source] TokenError),
    /// A worker task panicked or was cancelled
    #[error("Worker task failed: {0}")]
    Worker(String),
    /// The token file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Output file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Top-level failure of a generator run
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Invalid settings
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The run's random source could not be created or forked
    #[error("Random source error: {0}")]
    Random(#[from] TokenError),
    /// An algorithm's key could not be loaded
    #[error("{algorithm} key: {source}")]
    Secrets {
        /// Algorithm whose key failed
        algorithm: TokenAlgorithm,
        /// Loader error
        #[source]
        source: SecretsError,
    },
    /// An algorithm's batch failed
    #[error("{algorithm} batch: {source}")]
    Batch {
        /// Algorithm whose batch failed
        algorithm: TokenAlgorithm,
        /// Batch error
        #[source]
        source: BatchError,
    },
}

/// Result alias for generator runs
pub type GeneratorResult<T> = Result<T, GeneratorError>;

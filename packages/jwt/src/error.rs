//! Token issuance error types

use thiserror::Error;

/// Token operation result type
pub type TokenResult<T> = Result<T, TokenError>;

/// Errors raised by the issuance engine
///
/// None of these are retried internally. A caller that wants to retry must
/// start over with fresh claims so that new content keys and IVs are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Key material does not fit the algorithm, or is malformed or undersized
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The random source could not produce bytes
    #[error("Randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    /// Claims, headers or compact segments could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A cryptographic primitive rejected input that passed validation
    #[error("Cryptographic operation failed: {0}")]
    Crypto(String),
}

impl TokenError {
    /// Create a configuration error
    #[inline]
    #[must_use]
    pub fn configuration(msg: &str) -> Self {
        TokenError::Configuration(msg.to_string())
    }

    /// Create an algorithm/key mismatch error
    #[must_use]
    pub fn key_mismatch(algorithm: &str, expected: &str, actual: &str) -> Self {
        TokenError::Configuration(format!(
            "{algorithm} requires {expected}, got {actual}"
        ))
    }

    /// Create a randomness error
    #[inline]
    #[must_use]
    pub fn randomness(msg: &str) -> Self {
        TokenError::RandomnessUnavailable(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        TokenError::Serialization(msg.to_string())
    }

    /// Create a cryptographic failure error
    #[inline]
    #[must_use]
    pub fn crypto(msg: &str) -> Self {
        TokenError::Crypto(msg.to_string())
    }

    /// Whether this error stems from the supplied configuration
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, TokenError::Configuration(_))
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::Serialization(err.to_string())
    }
}

impl From<rand::Error> for TokenError {
    fn from(err: rand::Error) -> Self {
        TokenError::RandomnessUnavailable(err.to_string())
    }
}

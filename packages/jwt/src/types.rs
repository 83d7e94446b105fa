//! Algorithm selectors, protected headers and the compact token wrapper

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TokenError;

/// JWS signing algorithms supported by the signing engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SigningAlgorithm {
    /// HMAC with SHA-256
    #[serde(rename = "HS256")]
    Hs256,
    /// RSASSA-PKCS1-v1_5 with SHA-256
    #[serde(rename = "RS256")]
    Rs256,
    /// ECDSA on P-256 with SHA-256
    #[serde(rename = "ES256")]
    Es256,
}

impl SigningAlgorithm {
    /// All signing algorithms, in output order
    pub const ALL: [SigningAlgorithm; 3] = [Self::Hs256, Self::Rs256, Self::Es256];

    /// The `alg` header value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hs256 => "HS256",
            Self::Rs256 => "RS256",
            Self::Es256 => "ES256",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWE key management algorithm. Only RSA-OAEP is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyManagementAlgorithm {
    /// RSAES-OAEP with SHA-1 and MGF1-SHA-1 (RFC 7518 §4.3)
    #[serde(rename = "RSA-OAEP")]
    RsaOaep,
}

/// JWE content encryption algorithm. Only A256GCM is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentEncryption {
    /// AES-256 in Galois/Counter Mode
    #[serde(rename = "A256GCM")]
    A256Gcm,
}

/// Every token family the generator can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenAlgorithm {
    /// Signed token
    #[serde(rename = "HS256")]
    Hs256,
    /// Signed token
    #[serde(rename = "RS256")]
    Rs256,
    /// Signed token
    #[serde(rename = "ES256")]
    Es256,
    /// RSA-OAEP + A256GCM encrypted token
    #[serde(rename = "JWE")]
    Jwe,
}

impl TokenAlgorithm {
    /// All token families, in the order the generator runs them
    pub const ALL: [TokenAlgorithm; 4] = [Self::Hs256, Self::Rs256, Self::Es256, Self::Jwe];

    /// Display label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hs256 => "HS256",
            Self::Rs256 => "RS256",
            Self::Es256 => "ES256",
            Self::Jwe => "JWE",
        }
    }

    /// The signing algorithm, if this family is a JWS
    #[must_use]
    pub fn signing(self) -> Option<SigningAlgorithm> {
        match self {
            Self::Hs256 => Some(SigningAlgorithm::Hs256),
            Self::Rs256 => Some(SigningAlgorithm::Rs256),
            Self::Es256 => Some(SigningAlgorithm::Es256),
            Self::Jwe => None,
        }
    }

    /// Number of dot-separated segments in a token of this family
    #[must_use]
    pub fn segment_count(self) -> usize {
        match self {
            Self::Jwe => 5,
            _ => 3,
        }
    }
}

impl From<SigningAlgorithm> for TokenAlgorithm {
    fn from(alg: SigningAlgorithm) -> Self {
        match alg {
            SigningAlgorithm::Hs256 => Self::Hs256,
            SigningAlgorithm::Rs256 => Self::Rs256,
            SigningAlgorithm::Es256 => Self::Es256,
        }
    }
}

impl fmt::Display for TokenAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenAlgorithm {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HS256" => Ok(Self::Hs256),
            "RS256" => Ok(Self::Rs256),
            "ES256" => Ok(Self::Es256),
            "JWE" => Ok(Self::Jwe),
            other => Err(TokenError::Configuration(format!(
                "Unsupported algorithm: {other}"
            ))),
        }
    }
}

/// JWS protected header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwsHeader {
    /// Signing algorithm
    pub alg: SigningAlgorithm,
    /// Token type, always `JWT`
    pub typ: String,
}

impl JwsHeader {
    /// Header for the given algorithm
    #[must_use]
    pub fn new(alg: SigningAlgorithm) -> Self {
        Self {
            alg,
            typ: "JWT".to_string(),
        }
    }
}

/// JWE protected header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JweHeader {
    /// Key management algorithm
    pub alg: KeyManagementAlgorithm,
    /// Content encryption algorithm
    pub enc: ContentEncryption,
}

impl JweHeader {
    /// `{"alg":"RSA-OAEP","enc":"A256GCM"}`
    #[must_use]
    pub fn rsa_oaep_a256gcm() -> Self {
        Self {
            alg: KeyManagementAlgorithm::RsaOaep,
            enc: ContentEncryption::A256Gcm,
        }
    }
}

impl Default for JweHeader {
    fn default() -> Self {
        Self::rsa_oaep_a256gcm()
    }
}

/// Compact serialized token (JWS or JWE)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompactToken(String);

impl CompactToken {
    /// Dot-separated segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Number of segments: 3 for JWS, 5 for JWE
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// Borrow as `&str`
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the inner string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for CompactToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<CompactToken> for String {
    fn from(token: CompactToken) -> Self {
        token.0
    }
}

impl AsRef<str> for CompactToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompactToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Key material handed to the engine
//!
//! Keys arrive already read from disk; this module only parses PEM text and
//! checks strength. Each variant is tagged with the algorithm family it can
//! serve, and the engines re-check that pairing on every call.

use std::fmt;

use p256::ecdsa::SigningKey;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::error::{TokenError, TokenResult};

/// Smallest RSA modulus accepted from PEM input, in bits.
pub const MIN_RSA_MODULUS_BITS: usize = 2048;

/// Recommended HMAC-SHA256 secret length (RFC 7518 §3.2), in bytes.
pub const RECOMMENDED_HMAC_KEY_LEN: usize = 32;

/// HMAC secret bytes, zeroized on drop
#[derive(Clone)]
pub struct SharedSecret(Zeroizing<Vec<u8>>);

impl SharedSecret {
    /// Raw secret bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Secret length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the secret is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret({} bytes)", self.0.len())
    }
}

/// Algorithm-tagged key material
#[derive(Clone)]
pub enum KeyMaterial {
    /// HS256 secret
    SharedSecret(SharedSecret),
    /// RS256 signing key
    RsaPrivate(RsaPrivateKey),
    /// JWE key-wrapping key
    RsaPublic(RsaPublicKey),
    /// ES256 signing key
    EcPrivate(SigningKey),
}

impl KeyMaterial {
    /// Wrap an HMAC secret
    ///
    /// Secrets shorter than 32 bytes are accepted with a warning.
    ///
    /// # Errors
    /// Returns `Configuration` for an empty secret.
    pub fn shared_secret(secret: impl Into<Vec<u8>>) -> TokenResult<Self> {
        let secret = Zeroizing::new(secret.into());
        if secret.is_empty() {
            return Err(TokenError::configuration("HS256 secret must not be empty"));
        }
        if secret.len() < RECOMMENDED_HMAC_KEY_LEN {
            tracing::warn!(
                len = secret.len(),
                recommended = RECOMMENDED_HMAC_KEY_LEN,
                "HS256 secret is shorter than recommended"
            );
        }
        Ok(Self::SharedSecret(SharedSecret(secret)))
    }

    /// Wrap a parsed RSA private key after checking its size
    ///
    /// # Errors
    /// Returns `Configuration` if the modulus is below 2048 bits.
    pub fn rsa_private(key: RsaPrivateKey) -> TokenResult<Self> {
        check_rsa_modulus(&key, "RSA private key")?;
        Ok(Self::RsaPrivate(key))
    }

    /// Wrap a parsed RSA public key after checking its size
    ///
    /// # Errors
    /// Returns `Configuration` if the modulus is below 2048 bits.
    pub fn rsa_public(key: RsaPublicKey) -> TokenResult<Self> {
        check_rsa_modulus(&key, "RSA public key")?;
        Ok(Self::RsaPublic(key))
    }

    /// Parse an RSA private key from PKCS#1 (`RSA PRIVATE KEY`) or PKCS#8
    /// (`PRIVATE KEY`) PEM
    ///
    /// # Errors
    /// Returns `Configuration` for unparseable or undersized keys.
    pub fn rsa_private_from_pem(pem: &str) -> TokenResult<Self> {
        let key = if pem.contains("BEGIN RSA PRIVATE KEY") {
            use rsa::pkcs1::DecodeRsaPrivateKey;
            RsaPrivateKey::from_pkcs1_pem(pem).map_err(|e| {
                TokenError::Configuration(format!("Invalid PKCS#1 RSA private key: {e}"))
            })?
        } else {
            use rsa::pkcs8::DecodePrivateKey;
            RsaPrivateKey::from_pkcs8_pem(pem).map_err(|e| {
                TokenError::Configuration(format!("Invalid PKCS#8 RSA private key: {e}"))
            })?
        };
        tracing::debug!(bits = key.n().bits(), "parsed RSA private key");
        Self::rsa_private(key)
    }

    /// Parse an RSA public key from SPKI (`PUBLIC KEY`) or PKCS#1
    /// (`RSA PUBLIC KEY`) PEM
    ///
    /// # Errors
    /// Returns `Configuration` for unparseable or undersized keys.
    pub fn rsa_public_from_pem(pem: &str) -> TokenResult<Self> {
        let key = if pem.contains("BEGIN RSA PUBLIC KEY") {
            use rsa::pkcs1::DecodeRsaPublicKey;
            RsaPublicKey::from_pkcs1_pem(pem).map_err(|e| {
                TokenError::Configuration(format!("Invalid PKCS#1 RSA public key: {e}"))
            })?
        } else {
            use rsa::pkcs8::DecodePublicKey;
            RsaPublicKey::from_public_key_pem(pem).map_err(|e| {
                TokenError::Configuration(format!("Invalid SPKI RSA public key: {e}"))
            })?
        };
        tracing::debug!(bits = key.n().bits(), "parsed RSA public key");
        Self::rsa_public(key)
    }

    /// Parse a P-256 private key from SEC1 (`EC PRIVATE KEY`) or PKCS#8 PEM
    ///
    /// Keys on any other curve are rejected by the parser's curve OID check.
    ///
    /// # Errors
    /// Returns `Configuration` for unparseable keys or keys not on P-256.
    pub fn ec_private_from_pem(pem: &str) -> TokenResult<Self> {
        let key = if pem.contains("BEGIN EC PRIVATE KEY") {
            let secret = p256::SecretKey::from_sec1_pem(pem).map_err(|e| {
                TokenError::Configuration(format!("Invalid SEC1 P-256 private key: {e}"))
            })?;
            SigningKey::from(secret)
        } else {
            use p256::pkcs8::DecodePrivateKey;
            SigningKey::from_pkcs8_pem(pem).map_err(|e| {
                TokenError::Configuration(format!("Invalid PKCS#8 P-256 private key: {e}"))
            })?
        };
        Ok(Self::EcPrivate(key))
    }

    /// Human-readable variant name, used in error messages and logs
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SharedSecret(_) => "shared secret",
            Self::RsaPrivate(_) => "RSA private key",
            Self::RsaPublic(_) => "RSA public key",
            Self::EcPrivate(_) => "EC P-256 private key",
        }
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SharedSecret(secret) => fmt::Debug::fmt(secret, f),
            Self::RsaPrivate(key) => write!(f, "RsaPrivate({} bits)", key.n().bits()),
            Self::RsaPublic(key) => write!(f, "RsaPublic({} bits)", key.n().bits()),
            Self::EcPrivate(_) => f.write_str("EcPrivate(P-256)"),
        }
    }
}

fn check_rsa_modulus(key: &impl PublicKeyParts, what: &str) -> TokenResult<()> {
    let bits = key.n().bits();
    if bits < MIN_RSA_MODULUS_BITS {
        return Err(TokenError::Configuration(format!(
            "{what} modulus is {bits} bits, at least {MIN_RSA_MODULUS_BITS} required"
        )));
    }
    Ok(())
}

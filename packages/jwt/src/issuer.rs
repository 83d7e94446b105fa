//! One-call issuance: fresh claims, then sign or encrypt
//!
//! A [`TokenIssuer`] pairs an algorithm with the key it needs, checked once
//! at construction. It is `Send + Sync` and cheap to clone, so batch workers
//! share one issuer and bring their own [`TokenRng`](crate::TokenRng).

use std::sync::Arc;

use rand::{CryptoRng, RngCore};

use crate::claims::{build_claims, Claims};
use crate::encrypt::{encrypt, ensure_wrapping_key};
use crate::error::TokenResult;
use crate::keys::KeyMaterial;
use crate::sign::{ensure_signing_key, sign};
use crate::types::{CompactToken, SigningAlgorithm, TokenAlgorithm};

/// Algorithm tagged with its key
#[derive(Debug, Clone)]
pub enum TokenIssuer {
    /// JWS issuer for HS256, RS256 or ES256
    Signed {
        /// Signing algorithm
        algorithm: SigningAlgorithm,
        /// Key matching `algorithm`
        key: Arc<KeyMaterial>,
    },
    /// RSA-OAEP + A256GCM JWE issuer
    Encrypted {
        /// RSA public key
        key: Arc<KeyMaterial>,
    },
}

impl TokenIssuer {
    /// Pair `algorithm` with `key`
    ///
    /// # Errors
    /// Returns `Configuration` if the key cannot serve the algorithm.
    pub fn new(algorithm: TokenAlgorithm, key: Arc<KeyMaterial>) -> TokenResult<Self> {
        let issuer = match algorithm.signing() {
            Some(algorithm) => {
                ensure_signing_key(algorithm, &key)?;
                Self::Signed { algorithm, key }
            }
            None => {
                ensure_wrapping_key(&key)?;
                Self::Encrypted { key }
            }
        };
        tracing::debug!(alg = %issuer.algorithm(), key = ?issuer.key(), "token issuer ready");
        Ok(issuer)
    }

    /// Token family this issuer produces
    #[must_use]
    pub fn algorithm(&self) -> TokenAlgorithm {
        match self {
            Self::Signed { algorithm, .. } => TokenAlgorithm::from(*algorithm),
            Self::Encrypted { .. } => TokenAlgorithm::Jwe,
        }
    }

    /// Key material in use
    #[must_use]
    pub fn key(&self) -> &KeyMaterial {
        match self {
            Self::Signed { key, .. } | Self::Encrypted { key } => key.as_ref(),
        }
    }

    /// Issue one token over freshly built claims
    ///
    /// # Errors
    /// Propagates signing or encryption errors; nothing is retried.
    pub fn issue<R: RngCore + CryptoRng>(&self, rng: &mut R) -> TokenResult<CompactToken> {
        let claims = build_claims(rng);
        self.issue_claims(&claims, rng)
    }

    /// Issue one token over caller-supplied claims
    ///
    /// # Errors
    /// Propagates signing or encryption errors; nothing is retried.
    pub fn issue_claims<R: RngCore + CryptoRng>(
        &self,
        claims: &Claims,
        rng: &mut R,
    ) -> TokenResult<CompactToken> {
        match self {
            Self::Signed { algorithm, key } => sign(claims, key, *algorithm, rng),
            Self::Encrypted { key } => encrypt(claims, key, rng),
        }
    }
}

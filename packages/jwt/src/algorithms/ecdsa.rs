//! ECDSA on P-256 with SHA-256 (ES256)

use crate::error::{TokenError, TokenResult};
use p256::ecdsa::signature::RandomizedSigner;
use p256::ecdsa::{Signature, SigningKey};
use rand::{CryptoRng, RngCore};

/// Sign with ES256 using a nonce hedged with fresh randomness.
///
/// Returns the fixed-width `r || s` encoding (64 bytes) required by
/// RFC 7518 §3.4, not DER.
#[inline]
pub(crate) fn sign_es256<R: RngCore + CryptoRng>(
    message: &[u8],
    signing_key: &SigningKey,
    rng: &mut R,
) -> TokenResult<Vec<u8>> {
    let signature: Signature = signing_key
        .try_sign_with_rng(rng, message)
        .map_err(|e| TokenError::Crypto(format!("ES256 signing failed: {e}")))?;
    Ok(signature.to_bytes().to_vec())
}

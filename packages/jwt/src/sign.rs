//! Signing engine: claims + key + algorithm -> three-segment JWS

use rand::{CryptoRng, RngCore};

use crate::algorithms::{ecdsa::sign_es256, hmac::sign_hs256, rsa::sign_rs256};
use crate::claims::Claims;
use crate::compact;
use crate::error::{TokenError, TokenResult};
use crate::keys::KeyMaterial;
use crate::types::{CompactToken, JwsHeader, SigningAlgorithm};

/// Fail unless `key` is the variant `algorithm` signs with
///
/// Runs before any serialization or cryptographic work.
///
/// # Errors
/// Returns `Configuration` on a mismatch.
pub fn ensure_signing_key(algorithm: SigningAlgorithm, key: &KeyMaterial) -> TokenResult<()> {
    let expected = match (algorithm, key) {
        (SigningAlgorithm::Hs256, KeyMaterial::SharedSecret(_))
        | (SigningAlgorithm::Rs256, KeyMaterial::RsaPrivate(_))
        | (SigningAlgorithm::Es256, KeyMaterial::EcPrivate(_)) => return Ok(()),
        (SigningAlgorithm::Hs256, _) => "a shared secret",
        (SigningAlgorithm::Rs256, _) => "an RSA private key",
        (SigningAlgorithm::Es256, _) => "an EC P-256 private key",
    };
    Err(TokenError::key_mismatch(algorithm.as_str(), expected, key.kind()))
}

/// Sign `claims` into a compact JWS
///
/// HS256 and RS256 output is a pure function of claims and key. ES256 draws
/// nonce entropy from `rng`, so repeated calls give different, equally valid
/// tokens; `rng` is untouched for the other two algorithms.
///
/// # Errors
/// - `Configuration` if `key` does not match `algorithm` (checked first)
/// - `Serialization` if the claims cannot be encoded
/// - `Crypto` if the primitive fails
pub fn sign<R: RngCore + CryptoRng>(
    claims: &Claims,
    key: &KeyMaterial,
    algorithm: SigningAlgorithm,
    rng: &mut R,
) -> TokenResult<CompactToken> {
    ensure_signing_key(algorithm, key)?;

    let payload = claims.to_json()?;
    let signing_input = compact::signing_input(&JwsHeader::new(algorithm), &payload)?;
    let message = signing_input.as_bytes();

    let signature = match key {
        KeyMaterial::SharedSecret(secret) => sign_hs256(message, secret.as_bytes())?,
        KeyMaterial::RsaPrivate(private_key) => sign_rs256(message, private_key)?,
        KeyMaterial::EcPrivate(signing_key) => sign_es256(message, signing_key, rng)?,
        // rejected by ensure_signing_key
        KeyMaterial::RsaPublic(_) => {
            return Err(TokenError::key_mismatch(
                algorithm.as_str(),
                "a signing key",
                key.kind(),
            ));
        }
    };

    tracing::trace!(alg = %algorithm, sig_len = signature.len(), "signed token");
    Ok(CompactToken::from(compact::attach_signature(
        signing_input,
        &signature,
    )))
}

//! Encryption engine: claims + RSA public key -> five-segment JWE
//!
//! Key management is RSA-OAEP (SHA-1, MGF1-SHA-1), content encryption is
//! AES-256-GCM with the encoded protected header as AAD (RFC 7516 §5.1).
//! A new content key and IV are drawn for every token; a key/IV pair must
//! never be reused under GCM.

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::{CryptoRng, RngCore};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPublicKey};
use sha1::Sha1;
use zeroize::Zeroizing;

use crate::claims::Claims;
use crate::compact;
use crate::error::{TokenError, TokenResult};
use crate::keys::KeyMaterial;
use crate::types::{CompactToken, JweHeader};

/// Content-encryption key length (A256GCM), in bytes.
pub const CEK_LEN: usize = 32;

/// GCM initialization vector length, in bytes.
pub const IV_LEN: usize = 12;

/// GCM authentication tag length, in bytes.
pub const TAG_LEN: usize = 16;

const SHA1_OUTPUT_LEN: usize = 20;

/// Smallest modulus, in bytes, that can OAEP-wrap a content key:
/// `k >= mLen + 2 * hLen + 2` (RFC 8017 §7.1.1).
pub const MIN_OAEP_MODULUS_BYTES: usize = CEK_LEN + 2 * SHA1_OUTPUT_LEN + 2;

/// Fail unless `key` is an RSA public key large enough to wrap a content key
///
/// # Errors
/// Returns `Configuration` on a key type mismatch or an undersized modulus.
pub fn ensure_wrapping_key(key: &KeyMaterial) -> TokenResult<&RsaPublicKey> {
    let KeyMaterial::RsaPublic(public_key) = key else {
        return Err(TokenError::key_mismatch(
            "RSA-OAEP",
            "an RSA public key",
            key.kind(),
        ));
    };
    if public_key.size() < MIN_OAEP_MODULUS_BYTES {
        return Err(TokenError::Configuration(format!(
            "RSA modulus of {} bytes cannot OAEP-wrap a {CEK_LEN}-byte key (needs {MIN_OAEP_MODULUS_BYTES})",
            public_key.size()
        )));
    }
    Ok(public_key)
}

/// Encrypt `claims` into a compact JWE for the holder of the private key
///
/// Output differs on every call, even for identical claims. No decryption or
/// self-check is performed; consumers must verify the tag.
///
/// # Errors
/// - `Configuration` for a non-RSA-public key or a modulus too small for OAEP,
///   raised before any ciphertext is produced
/// - `RandomnessUnavailable` if the content key or IV cannot be drawn
/// - `Serialization` / `Crypto` if encoding or a primitive fails
pub fn encrypt<R: RngCore + CryptoRng>(
    claims: &Claims,
    key: &KeyMaterial,
    rng: &mut R,
) -> TokenResult<CompactToken> {
    let public_key = ensure_wrapping_key(key)?;
    let plaintext = claims.to_json()?;

    let mut cek = Zeroizing::new([0u8; CEK_LEN]);
    rng.try_fill_bytes(&mut cek[..])?;
    let mut iv = [0u8; IV_LEN];
    rng.try_fill_bytes(&mut iv)?;

    let header = JweHeader::rsa_oaep_a256gcm();
    let protected = compact::encode_header(&header)?;

    let cipher = Aes256Gcm::new_from_slice(&cek[..])
        .map_err(|_| TokenError::crypto("Invalid AES-256-GCM key length"))?;
    let mut ciphertext = plaintext;
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&iv), protected.as_bytes(), &mut ciphertext)
        .map_err(|_| TokenError::crypto("AES-256-GCM encryption failed"))?;

    let encrypted_key = public_key
        .encrypt(rng, Oaep::new::<Sha1>(), &cek[..])
        .map_err(|e| TokenError::Crypto(format!("RSA-OAEP key wrap failed: {e}")))?;

    tracing::trace!(
        wrapped_len = encrypted_key.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted token"
    );
    let token = compact::encode_jwe(&header, &encrypted_key, &iv, &ciphertext, &tag)?;
    Ok(CompactToken::from(token))
}

//! Shared fixtures: generated keys and token decoding helpers

#![allow(dead_code)]

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce, Tag};
use jwtgen_jwt::compact::{decode_segment, split_segments};
use jwtgen_jwt::{Claims, KeyMaterial, TokenRng};
use once_cell::sync::Lazy;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// 2048-bit RSA key shared by every test in a binary
pub static RSA_KEY: Lazy<RsaPrivateKey> = Lazy::new(|| {
    let mut rng = TokenRng::seeded(2048);
    match RsaPrivateKey::new(&mut rng, 2048) {
        Ok(key) => key,
        Err(e) => panic!("RSA fixture generation failed: {e}"),
    }
});

/// P-256 secret key shared by every test in a binary
pub static EC_KEY: Lazy<p256::SecretKey> = Lazy::new(|| {
    let mut rng = TokenRng::seeded(256);
    p256::SecretKey::random(&mut rng)
});

pub const HS256_SECRET: &[u8] = b"load-test-shared-secret-0123456789";

pub fn hs256_key() -> KeyMaterial {
    match KeyMaterial::shared_secret(HS256_SECRET.to_vec()) {
        Ok(key) => key,
        Err(e) => panic!("secret fixture rejected: {e}"),
    }
}

pub fn rs256_key() -> KeyMaterial {
    KeyMaterial::RsaPrivate(RSA_KEY.clone())
}

pub fn rsa_public_key() -> KeyMaterial {
    KeyMaterial::RsaPublic(RsaPublicKey::from(&*RSA_KEY))
}

pub fn es256_key() -> KeyMaterial {
    KeyMaterial::EcPrivate(p256::ecdsa::SigningKey::from(EC_KEY.clone()))
}

/// Decode segment 2 of a JWS into claims
pub fn jws_claims(token: &str) -> Result<Claims, Box<dyn std::error::Error>> {
    let parts = split_segments(token, 3)?;
    let payload = decode_segment(parts[1])?;
    Ok(serde_json::from_slice(&payload)?)
}

/// Decoded JWE segments: header JSON, wrapped key, IV, ciphertext, tag
pub fn jwe_parts(token: &str) -> Result<[Vec<u8>; 5], Box<dyn std::error::Error>> {
    let parts = split_segments(token, 5)?;
    Ok([
        decode_segment(parts[0])?,
        decode_segment(parts[1])?,
        decode_segment(parts[2])?,
        decode_segment(parts[3])?,
        decode_segment(parts[4])?,
    ])
}

/// Unwrap the content key with the RSA private key
pub fn unwrap_cek(token: &str, key: &RsaPrivateKey) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let [_, encrypted_key, ..] = jwe_parts(token)?;
    Ok(key.decrypt(Oaep::new::<Sha1>(), &encrypted_key)?)
}

/// Full JWE decryption: unwrap, then AES-256-GCM with the header segment as AAD
pub fn decrypt_jwe(token: &str, key: &RsaPrivateKey) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let protected = split_segments(token, 5)?[0];
    let [_, _, iv, ciphertext, tag] = jwe_parts(token)?;
    if iv.len() != 12 || tag.len() != 16 {
        return Err("bad IV or tag length".into());
    }

    let cek = unwrap_cek(token, key)?;
    let cipher = Aes256Gcm::new_from_slice(&cek).map_err(|_| "bad content key length")?;
    let mut buffer = ciphertext;
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(&iv),
            protected.as_bytes(),
            &mut buffer,
            Tag::from_slice(&tag),
        )
        .map_err(|_| "authentication failed")?;
    Ok(buffer)
}

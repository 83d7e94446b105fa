//! Key files written into a temporary secrets directory

#![allow(dead_code)]

use std::path::Path;

use jwtgen_jwt::TokenRng;
use once_cell::sync::Lazy;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::{EncodePublicKey, LineEnding};
use rsa::RsaPrivateKey;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub static RSA_KEY: Lazy<RsaPrivateKey> = Lazy::new(|| {
    let mut rng = TokenRng::seeded(2048);
    match RsaPrivateKey::new(&mut rng, 2048) {
        Ok(key) => key,
        Err(e) => panic!("RSA fixture generation failed: {e}"),
    }
});

pub static EC_KEY: Lazy<p256::SecretKey> =
    Lazy::new(|| p256::SecretKey::random(&mut TokenRng::seeded(256)));

pub const HS256_SECRET: &str = "generator-test-secret-0123456789abc";

/// Populate `dir` with all four key files
pub fn write_secrets(dir: &Path) -> TestResult {
    std::fs::create_dir_all(dir)?;
    // trailing newline as an editor would leave it
    std::fs::write(dir.join("hs256-secret.txt"), format!("  {HS256_SECRET}\n"))?;

    let rsa_private = EncodeRsaPrivateKey::to_pkcs1_pem(&*RSA_KEY, LineEnding::LF)?;
    std::fs::write(dir.join("rs256-private.pem"), rsa_private.as_bytes())?;

    let rsa_public = EncodePublicKey::to_public_key_pem(&RSA_KEY.to_public_key(), LineEnding::LF)?;
    std::fs::write(dir.join("rsa-public.pem"), rsa_public)?;

    let ec_private = EC_KEY.to_sec1_pem(LineEnding::LF)?;
    std::fs::write(dir.join("es256-private.pem"), ec_private.as_bytes())?;
    Ok(())
}

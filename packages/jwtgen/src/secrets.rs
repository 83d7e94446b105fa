//! Key files on disk -> parsed key material
//!
//! Each algorithm reads one fixed file name under the secrets directory, and
//! only the files for enabled algorithms are touched.

use std::path::Path;
use std::sync::Arc;

use jwtgen_common::LoggingTransformer;
use jwtgen_jwt::{KeyMaterial, TokenAlgorithm, TokenResult};
use zeroize::Zeroizing;

use crate::error::SecretsError;

/// HMAC secret, UTF-8 text
pub const HS256_SECRET_FILE: &str = "hs256-secret.txt";
/// RSA private key, PKCS#1 or PKCS#8 PEM
pub const RS256_PRIVATE_KEY_FILE: &str = "rs256-private.pem";
/// P-256 private key, SEC1 or PKCS#8 PEM
pub const ES256_PRIVATE_KEY_FILE: &str = "es256-private.pem";
/// RSA public key, SPKI or PKCS#1 PEM
pub const JWE_PUBLIC_KEY_FILE: &str = "rsa-public.pem";

/// Key file name for `algorithm`
#[must_use]
pub fn secret_file_name(algorithm: TokenAlgorithm) -> &'static str {
    match algorithm {
        TokenAlgorithm::Hs256 => HS256_SECRET_FILE,
        TokenAlgorithm::Rs256 => RS256_PRIVATE_KEY_FILE,
        TokenAlgorithm::Es256 => ES256_PRIVATE_KEY_FILE,
        TokenAlgorithm::Jwe => JWE_PUBLIC_KEY_FILE,
    }
}

/// Load a text file with surrounding whitespace removed
///
/// # Errors
/// `SecretsError::Read` if the file is missing or not UTF-8.
pub async fn load_text(path: &Path) -> Result<Zeroizing<String>, SecretsError> {
    let content: Zeroizing<String> = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SecretsError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .into();
    Ok(Zeroizing::new(content.trim().to_owned()))
}

/// Load and parse the key `algorithm` needs from `secrets_dir`
///
/// # Errors
/// `SecretsError::Read` naming the path for unreadable files,
/// `SecretsError::Key` for content the engine rejects.
pub async fn load_key(
    secrets_dir: &Path,
    algorithm: TokenAlgorithm,
) -> Result<Arc<KeyMaterial>, SecretsError> {
    let path = secrets_dir.join(secret_file_name(algorithm));
    let text = load_text(&path).await?;

    let parsed = parse_key(algorithm, &text);
    let key = parsed.map_err(|source| SecretsError::Key {
        path: path.clone(),
        source,
    })?;

    LoggingTransformer::log_key_loaded(key.kind(), &path, text.as_bytes());
    Ok(Arc::new(key))
}

fn parse_key(algorithm: TokenAlgorithm, text: &str) -> TokenResult<KeyMaterial> {
    match algorithm {
        TokenAlgorithm::Hs256 => KeyMaterial::shared_secret(text.as_bytes()),
        TokenAlgorithm::Rs256 => KeyMaterial::rsa_private_from_pem(text),
        TokenAlgorithm::Es256 => KeyMaterial::ec_private_from_pem(text),
        TokenAlgorithm::Jwe => KeyMaterial::rsa_public_from_pem(text),
    }
}

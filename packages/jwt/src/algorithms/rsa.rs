//! RSASSA-PKCS1-v1_5 with SHA-256 (RS256)

use crate::error::{TokenError, TokenResult};
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};

/// Sign with RS256. PKCS#1 v1.5 padding is deterministic.
#[inline]
pub(crate) fn sign_rs256(message: &[u8], private_key: &RsaPrivateKey) -> TokenResult<Vec<u8>> {
    let digest = Sha256::digest(message);
    private_key
        .sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
        .map_err(|e| TokenError::Crypto(format!("RS256 signing failed: {e}")))
}

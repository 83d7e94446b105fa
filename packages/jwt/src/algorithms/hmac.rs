//! HMAC-SHA256 (HS256)

use crate::error::{TokenError, TokenResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign with HMAC-SHA256. Deterministic for a given input and secret.
#[inline]
pub(crate) fn sign_hs256(message: &[u8], secret: &[u8]) -> TokenResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| TokenError::configuration("Invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test case 2
    #[test]
    fn test_rfc4231_vector() -> TokenResult<()> {
        let tag = sign_hs256(b"what do ya want for nothing?", b"Jefe")?;
        assert_eq!(
            tag,
            [
                0x5b, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e, 0x6a, 0x04, 0x24, 0x26, 0x08,
                0x95, 0x75, 0xc7, 0x5a, 0x00, 0x3f, 0x08, 0x9d, 0x27, 0x39, 0x83, 0x9d, 0xec,
                0x58, 0xb9, 0x64, 0xec, 0x38, 0x43,
            ]
        );
        Ok(())
    }
}

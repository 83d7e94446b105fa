//! Compact serialization shared by JWS and JWE
//!
//! Every segment is base64url without padding (RFC 7515 §2), so encoded
//! tokens never contain `=`, `+`, `/` or whitespace.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Serialize;

use crate::error::{TokenError, TokenResult};

/// Base64url-encode one segment
#[inline]
#[must_use]
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Base64url-decode one segment
///
/// # Errors
/// Returns `Serialization` for input that is not unpadded base64url.
#[inline]
pub fn decode_segment(segment: &str) -> TokenResult<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::Serialization(format!("Invalid base64url segment: {e}")))
}

/// JSON-encode a protected header and base64url it
///
/// For JWE the returned string is also the AAD.
///
/// # Errors
/// Returns `Serialization` if the header cannot be JSON-encoded.
pub fn encode_header<H: Serialize>(header: &H) -> TokenResult<String> {
    let json = serde_json::to_vec(header)?;
    Ok(encode_segment(&json))
}

/// `b64u(header) . b64u(payload)`, the bytes a JWS signature covers
///
/// # Errors
/// Returns `Serialization` if the header cannot be JSON-encoded.
pub fn signing_input<H: Serialize>(header: &H, payload: &[u8]) -> TokenResult<String> {
    let header_b64 = encode_header(header)?;
    let payload_b64 = encode_segment(payload);

    let mut input = String::with_capacity(header_b64.len() + 1 + payload_b64.len());
    input.push_str(&header_b64);
    input.push('.');
    input.push_str(&payload_b64);
    Ok(input)
}

/// Append the signature segment to a signing input
#[must_use]
pub fn attach_signature(mut signing_input: String, signature: &[u8]) -> String {
    let signature_b64 = encode_segment(signature);
    signing_input.reserve(1 + signature_b64.len());
    signing_input.push('.');
    signing_input.push_str(&signature_b64);
    signing_input
}

/// Three-segment JWS compact form
///
/// # Errors
/// Returns `Serialization` if the header cannot be JSON-encoded.
pub fn encode_jws<H: Serialize>(header: &H, payload: &[u8], signature: &[u8]) -> TokenResult<String> {
    Ok(attach_signature(signing_input(header, payload)?, signature))
}

/// Five-segment JWE compact form
///
/// # Errors
/// Returns `Serialization` if the header cannot be JSON-encoded, or if
/// `encrypted_key` or `iv` is empty.
pub fn encode_jwe<H: Serialize>(
    header: &H,
    encrypted_key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
) -> TokenResult<String> {
    if encrypted_key.is_empty() {
        return Err(TokenError::serialization("JWE encrypted key segment is empty"));
    }
    if iv.is_empty() {
        return Err(TokenError::serialization("JWE initialization vector is empty"));
    }

    let segments = [
        encode_header(header)?,
        encode_segment(encrypted_key),
        encode_segment(iv),
        encode_segment(ciphertext),
        encode_segment(tag),
    ];
    Ok(segments.join("."))
}

/// Split a compact token, checking the segment count
///
/// # Errors
/// Returns `Serialization` if the token does not have `expected` segments.
pub fn split_segments(token: &str, expected: usize) -> TokenResult<Vec<&str>> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != expected {
        return Err(TokenError::Serialization(format!(
            "Expected {expected} segments, got {}",
            parts.len()
        )));
    }
    Ok(parts)
}

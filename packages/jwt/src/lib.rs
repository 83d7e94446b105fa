//! Token issuance engine for load-test fixtures
//!
//! Builds a small random claim set and turns it into a compact token:
//! - JWS with HS256, RS256 or ES256
//! - JWE with RSA-OAEP key wrapping and A256GCM content encryption
//!
//! The engine never reads files and keeps no global state. Key material is
//! passed in already parsed, and randomness comes from an explicit
//! [`TokenRng`] so that seeded runs are reproducible.
//!
//! ```no_run
//! use std::sync::Arc;
//! use jwtgen_jwt::{KeyMaterial, TokenAlgorithm, TokenIssuer, TokenRng};
//!
//! # fn main() -> jwtgen_jwt::TokenResult<()> {
//! let key = Arc::new(KeyMaterial::shared_secret(b"0123456789abcdef0123456789abcdef".to_vec())?);
//! let issuer = TokenIssuer::new(TokenAlgorithm::Hs256, key)?;
//! let mut rng = TokenRng::from_entropy()?;
//! let token = issuer.issue(&mut rng)?;
//! assert_eq!(token.segment_count(), 3);
//! # Ok(())
//! # }
//! ```

pub(crate) mod algorithms;
pub mod claims;
pub mod compact;
pub mod encrypt;
mod error;
pub mod issuer;
pub mod keys;
mod rng;
pub mod sign;
mod types;

pub use claims::{build_claims, build_claims_at, Claims, RANDOM_CLAIM_LEN};
pub use encrypt::encrypt;
pub use error::*;
pub use issuer::TokenIssuer;
pub use keys::{KeyMaterial, SharedSecret};
pub use rng::TokenRng;
pub use sign::sign;
pub use types::*;

//! Load-test claim set: a random subject, the issue time and a random nonce.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the random `sub` and `rnd` values.
pub const RANDOM_CLAIM_LEN: usize = 16;

/// Immutable claim set encoded by every token family.
///
/// Field order is the serialization order: `sub`, `iat`, `rnd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    sub: String,
    iat: i64,
    rnd: String,
}

impl Claims {
    /// Subject.
    #[must_use]
    pub fn sub(&self) -> &str {
        &self.sub
    }

    /// Issued-at (unix seconds).
    #[must_use]
    pub fn iat(&self) -> i64 {
        self.iat
    }

    /// Random nonce.
    #[must_use]
    pub fn rnd(&self) -> &str {
        &self.rnd
    }

    /// Canonical UTF-8 JSON bytes.
    ///
    /// # Errors
    /// Returns `Serialization` if JSON encoding fails.
    pub fn to_json(&self) -> crate::TokenResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Build a fresh claim set stamped with the current time.
pub fn build_claims<R: Rng + ?Sized>(rng: &mut R) -> Claims {
    build_claims_at(rng, Utc::now().timestamp())
}

/// Build a fresh claim set with an explicit issue time.
pub fn build_claims_at<R: Rng + ?Sized>(rng: &mut R, iat: i64) -> Claims {
    let sub = random_alphanumeric(rng, RANDOM_CLAIM_LEN);
    let rnd = random_alphanumeric(rng, RANDOM_CLAIM_LEN);
    Claims { sub, iat, rnd }
}

fn random_alphanumeric<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

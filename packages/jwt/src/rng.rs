//! Explicit random source for claim values, content keys, IVs and signature nonces
//!
//! There is no process-wide generator. Every caller owns a [`TokenRng`] and
//! passes it down; parallel workers each get their own stream via
//! [`TokenRng::fork`].

use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};

use crate::error::TokenResult;

/// Cryptographically secure random source handle
#[derive(Debug, Clone)]
pub struct TokenRng {
    inner: StdRng,
}

impl TokenRng {
    /// Seed from operating-system entropy
    ///
    /// # Errors
    /// Returns `RandomnessUnavailable` if the OS entropy source fails.
    pub fn from_entropy() -> TokenResult<Self> {
        let inner = StdRng::from_rng(OsRng)?;
        Ok(Self { inner })
    }

    /// Deterministic stream for reproducible fixtures
    ///
    /// The same seed yields the same claim values, content keys and IVs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Build from `seed` when given, otherwise from OS entropy
    ///
    /// # Errors
    /// Returns `RandomnessUnavailable` if OS entropy is needed and fails.
    pub fn from_optional_seed(seed: Option<u64>) -> TokenResult<Self> {
        match seed {
            Some(seed) => Ok(Self::seeded(seed)),
            None => Self::from_entropy(),
        }
    }

    /// Derive an independent child stream
    ///
    /// Children forked in the same order from the same seeded parent are
    /// identical across runs.
    ///
    /// # Errors
    /// Returns `RandomnessUnavailable` if the parent cannot produce a seed.
    pub fn fork(&mut self) -> TokenResult<Self> {
        let inner = StdRng::from_rng(&mut self.inner)?;
        Ok(Self { inner })
    }
}

impl RngCore for TokenRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for TokenRng {}

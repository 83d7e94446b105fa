//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of key material.
//! The engine emits `tracing` events which are forwarded to the `log` facade,
//! so one `env_logger` backend prints everything.

use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Once;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Logging setup and secret-safe log helpers
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (call once at application startup)
    ///
    /// Configure levels via the `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - everything, including per-worker progress
    /// - `RUST_LOG=info` - configuration summary and per-algorithm results (default)
    /// - `RUST_LOG=jwtgen_jwt=trace` - engine internals only
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .format_timestamp_micros()
                .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Short SHA-256 fingerprint of secret material, safe to put in a log line
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    #[must_use]
    pub fn fingerprint(material: &[u8]) -> String {
        let digest = hex::encode(Sha256::digest(material));
        format!("#{}", &digest[..12])
    }

    /// Log that a piece of key material was loaded, without exposing it
    pub fn log_key_loaded(kind: &str, path: &Path, material: &[u8]) {
        info!(
            "Loaded {kind} from {} (fingerprint: {})",
            path.display(),
            Self::fingerprint(material)
        );
    }

    /// Log the outcome of one algorithm's batch
    pub fn log_batch_result(algorithm: &str, path: &Path, count: usize, elapsed: Duration) {
        info!(
            "{algorithm:<6} -> {} ({count} tokens in {:.2}s)",
            path.display(),
            elapsed.as_secs_f64()
        );
    }

    /// Log a skipped algorithm
    pub fn log_skipped(algorithm: &str) {
        debug!("{algorithm} skipped by configuration");
    }

    /// Log a failed batch with its full error chain
    pub fn log_batch_failure(algorithm: &str, error: &dyn std::error::Error) {
        warn!("{algorithm} generation failed: {}", Self::error_chain(error));
    }

    /// Render an error and its sources as `outer: inner: root`
    ///
    /// Sources whose text already appears in the outer message are skipped.
    #[must_use]
    pub fn error_chain(error: &dyn std::error::Error) -> String {
        let mut rendered = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !rendered.contains(&text) {
                rendered.push_str(": ");
                rendered.push_str(&text);
            }
            source = cause.source();
        }
        rendered
    }
}

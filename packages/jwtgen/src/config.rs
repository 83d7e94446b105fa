//! Resolved generator settings
//!
//! Built from [`GeneratorConfig::default`], optionally overlaid by a JSON
//! file, then by explicit command-line flags (see [`crate::cli::Cli::resolve`]).

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use jwtgen_jwt::TokenAlgorithm;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tokens per algorithm when nothing else is given
pub const DEFAULT_COUNT: usize = 1000;

/// Settings for one generator run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Tokens generated per enabled algorithm
    pub count: usize,
    /// Directory holding the key files
    pub secrets_dir: PathBuf,
    /// Directory the token files are written to
    pub output_dir: PathBuf,
    /// Seed for reproducible claims; OS entropy when absent
    pub seed: Option<u64>,
    /// Blocking worker threads per batch
    pub workers: usize,
    /// Algorithms to skip
    pub disabled: Vec<TokenAlgorithm>,
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            secrets_dir: PathBuf::from("secrets"),
            output_dir: PathBuf::from("output"),
            seed: None,
            workers: default_workers(),
            disabled: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Read a JSON config file; absent fields keep their defaults
    ///
    /// # Errors
    /// `ConfigError::Read` or `ConfigError::Parse`, naming the file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Whether `algorithm` will be generated
    #[must_use]
    pub fn is_enabled(&self, algorithm: TokenAlgorithm) -> bool {
        !self.disabled.contains(&algorithm)
    }

    /// Skip `algorithm`
    pub fn disable(&mut self, algorithm: TokenAlgorithm) {
        if self.is_enabled(algorithm) {
            self.disabled.push(algorithm);
        }
    }

    /// Enabled algorithms in generation order
    pub fn enabled(&self) -> impl Iterator<Item = TokenAlgorithm> + '_ {
        TokenAlgorithm::ALL
            .into_iter()
            .filter(|algorithm| self.is_enabled(*algorithm))
    }

    /// Reject settings no run can satisfy
    ///
    /// # Errors
    /// `ConfigError::Invalid` for a zero count or zero workers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::Invalid("count must be > 0, got 0".into()));
        }
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be > 0, got 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.count, DEFAULT_COUNT);
        assert_eq!(config.secrets_dir, PathBuf::from("secrets"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.workers >= 1);
        assert_eq!(config.enabled().count(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_disable_is_idempotent() {
        let mut config = GeneratorConfig::default();
        config.disable(TokenAlgorithm::Jwe);
        config.disable(TokenAlgorithm::Jwe);
        assert_eq!(config.disabled, vec![TokenAlgorithm::Jwe]);
        assert_eq!(
            config.enabled().collect::<Vec<_>>(),
            vec![TokenAlgorithm::Hs256, TokenAlgorithm::Rs256, TokenAlgorithm::Es256]
        );
    }

    #[test]
    fn test_zero_count_and_workers_rejected() {
        let config = GeneratorConfig {
            count: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GeneratorConfig {
            workers: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_json_keeps_defaults() -> Result<(), serde_json::Error> {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"count": 5, "disabled": ["ES256", "JWE"]}"#)?;
        assert_eq!(config.count, 5);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(!config.is_enabled(TokenAlgorithm::Es256));
        assert!(config.is_enabled(TokenAlgorithm::Hs256));
        Ok(())
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = serde_json::from_str::<GeneratorConfig>(r#"{"cnt": 5}"#);
        assert!(result.is_err());
    }
}

//! Command-line definition

use std::path::PathBuf;

use clap::Parser;
use jwtgen_jwt::TokenAlgorithm;

use crate::config::GeneratorConfig;
use crate::error::ConfigError;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "jwtgen")]
#[command(about = "Generate HS256, RS256, ES256 and JWE tokens for load testing")]
pub struct Cli {
    /// Number of tokens per algorithm [default: 1000]
    #[arg(long)]
    pub count: Option<usize>,

    /// Alias for --count; wins when greater than zero
    #[arg(short = 'n')]
    pub n: Option<usize>,

    /// Skip HS256 tokens
    #[arg(long)]
    pub no_hs256: bool,

    /// Skip RS256 tokens
    #[arg(long)]
    pub no_rs256: bool,

    /// Skip ES256 tokens
    #[arg(long)]
    pub no_es256: bool,

    /// Skip JWE tokens
    #[arg(long)]
    pub no_jwe: bool,

    /// Directory holding hs256-secret.txt and the PEM keys [default: ./secrets]
    #[arg(long)]
    pub secrets_dir: Option<PathBuf>,

    /// Directory the token files are written to [default: ./output]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Seed for reproducible claims (not for production keys)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads per batch [default: available parallelism]
    #[arg(long)]
    pub workers: Option<usize>,

    /// JSON file with default settings; flags given here take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge defaults, the config file and these flags, then validate
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be loaded or the result is invalid.
    pub fn resolve(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(n) = self.n.filter(|n| *n > 0) {
            config.count = n;
        }
        if let Some(dir) = &self.secrets_dir {
            config.secrets_dir.clone_from(dir);
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }

        let skips = [
            (self.no_hs256, TokenAlgorithm::Hs256),
            (self.no_rs256, TokenAlgorithm::Rs256),
            (self.no_es256, TokenAlgorithm::Es256),
            (self.no_jwe, TokenAlgorithm::Jwe),
        ];
        for (skip, algorithm) in skips {
            if skip {
                config.disable(algorithm);
            }
        }

        config.validate()?;
        Ok(config)
    }
}

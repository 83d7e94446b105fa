//! One generator run: every enabled algorithm, in order

use std::path::PathBuf;
use std::time::Instant;

use jwtgen_common::LoggingTransformer;
use jwtgen_jwt::{TokenAlgorithm, TokenIssuer, TokenRng};

use crate::batch::{generate_tokens, output_file_name, write_tokens};
use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, GeneratorResult, SecretsError};
use crate::secrets::{load_key, secret_file_name};

/// Outcome of one algorithm's batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Token family written
    pub algorithm: TokenAlgorithm,
    /// Output file
    pub path: PathBuf,
    /// Lines written
    pub count: usize,
}

/// Generate and write tokens for every enabled algorithm
///
/// Each algorithm gets its own generator forked from the run's seed in a
/// fixed order, so a seeded run produces the same claims for an algorithm
/// whether or not the others are enabled (for a fixed worker count).
///
/// # Errors
/// Stops at the first algorithm that fails; files already written stay.
pub async fn run(config: &GeneratorConfig) -> GeneratorResult<Vec<BatchReport>> {
    config.validate()?;
    log::info!("Secrets: {}", config.secrets_dir.display());
    log::info!("Output:  {}", config.output_dir.display());
    log::info!(
        "Count:   {} per algorithm, {} workers{}",
        config.count,
        config.workers,
        if config.seed.is_some() { ", seeded" } else { "" }
    );

    let mut rng = TokenRng::from_optional_seed(config.seed)?;
    let mut reports = Vec::new();

    for algorithm in TokenAlgorithm::ALL {
        let mut algorithm_rng = rng.fork()?;
        if !config.is_enabled(algorithm) {
            LoggingTransformer::log_skipped(algorithm.as_str());
            continue;
        }

        match run_algorithm(config, algorithm, &mut algorithm_rng).await {
            Ok(report) => reports.push(report),
            Err(e) => {
                LoggingTransformer::log_batch_failure(algorithm.as_str(), &e);
                return Err(e);
            }
        }
    }

    if reports.is_empty() {
        log::warn!("Every algorithm is disabled; nothing written");
    }
    Ok(reports)
}

async fn run_algorithm(
    config: &GeneratorConfig,
    algorithm: TokenAlgorithm,
    rng: &mut TokenRng,
) -> GeneratorResult<BatchReport> {
    let started = Instant::now();
    let secrets_error = |source| GeneratorError::Secrets { algorithm, source };

    let key = load_key(&config.secrets_dir, algorithm)
        .await
        .map_err(secrets_error)?;
    let issuer = TokenIssuer::new(algorithm, key).map_err(|source| {
        secrets_error(SecretsError::Key {
            path: config.secrets_dir.join(secret_file_name(algorithm)),
            source,
        })
    })?;

    let batch_error = |source| GeneratorError::Batch { algorithm, source };
    let tokens = generate_tokens(config.count, config.workers, rng, move |rng| {
        issuer.issue(rng)
    })
    .await
    .map_err(batch_error)?;

    let path = config.output_dir.join(output_file_name(algorithm));
    write_tokens(&path, &tokens).await.map_err(batch_error)?;

    LoggingTransformer::log_batch_result(algorithm.as_str(), &path, tokens.len(), started.elapsed());
    Ok(BatchReport {
        algorithm,
        path,
        count: tokens.len(),
    })
}

//! Parallel batch generation and token file output
//!
//! A batch of `count` tokens is split into contiguous chunks, one per worker.
//! Workers run on the runtime's blocking pool, each with its own forked
//! [`TokenRng`], and their chunks are concatenated in worker order so token
//! `i` always lands at index `i`.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use jwtgen_jwt::{CompactToken, TokenAlgorithm, TokenResult, TokenRng};
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::BatchError;

/// Output file name for `algorithm`
#[must_use]
pub fn output_file_name(algorithm: TokenAlgorithm) -> &'static str {
    match algorithm {
        TokenAlgorithm::Hs256 => "hs256-tokens.txt",
        TokenAlgorithm::Rs256 => "rs256-tokens.txt",
        TokenAlgorithm::Es256 => "es256-tokens.txt",
        TokenAlgorithm::Jwe => "jwe-tokens.txt",
    }
}

/// Chunk lengths for `count` tokens over at most `workers` workers
///
/// The first `count % workers` chunks carry one extra token.
#[must_use]
pub fn chunk_sizes(count: usize, workers: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let workers = workers.clamp(1, count);
    let base = count / workers;
    let remainder = count % workers;
    (0..workers)
        .map(|worker| base + usize::from(worker < remainder))
        .collect()
}

/// Generate `count` tokens with `gen_fn` across `workers` blocking workers
///
/// `rng` is forked once per worker, in worker order, before any worker
/// starts. Once any worker fails the others stop at their next token and
/// the first failure (by chunk order) is returned. `count == 0` returns an
/// empty vec without calling `gen_fn` or touching `rng`.
///
/// # Errors
/// - `BatchError::Token` with the failing token index
/// - `BatchError::Random` if a worker generator cannot be forked
/// - `BatchError::Worker` if a worker panicked
pub async fn generate_tokens<F>(
    count: usize,
    workers: usize,
    rng: &mut TokenRng,
    gen_fn: F,
) -> Result<Vec<String>, BatchError>
where
    F: Fn(&mut TokenRng) -> TokenResult<CompactToken> + Send + Sync + 'static,
{
    let chunks = chunk_sizes(count, workers);
    if chunks.is_empty() {
        return Ok(Vec::new());
    }

    let worker_rngs = chunks
        .iter()
        .map(|_| rng.fork())
        .collect::<TokenResult<Vec<_>>>()
        .map_err(BatchError::Random)?;

    let gen_fn = Arc::new(gen_fn);
    let failed = Arc::new(AtomicBool::new(false));
    let mut handles = Vec::with_capacity(chunks.len());
    let mut start = 0;

    for (worker, (len, mut worker_rng)) in chunks.into_iter().zip(worker_rngs).enumerate() {
        let gen_fn = Arc::clone(&gen_fn);
        let failed = Arc::clone(&failed);

        handles.push(tokio::task::spawn_blocking(move || {
            let mut tokens = Vec::with_capacity(len);
            for index in start..start + len {
                if failed.load(Ordering::Relaxed) {
                    break;
                }
                match gen_fn(&mut worker_rng) {
                    Ok(token) => tokens.push(token.into_string()),
                    Err(source) => {
                        failed.store(true, Ordering::Relaxed);
                        return Err(BatchError::Token { index, source });
                    }
                }
            }
            log::debug!("Worker {worker} produced {} tokens", tokens.len());
            Ok(tokens)
        }));
        start += len;
    }

    let mut tokens = Vec::with_capacity(count);
    let mut first_error = None;
    for handle in handles {
        match handle.await {
            Ok(Ok(chunk)) => tokens.extend(chunk),
            Ok(Err(e)) => {
                first_error.get_or_insert(e);
            }
            Err(e) => {
                first_error.get_or_insert(BatchError::Worker(e.to_string()));
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(tokens),
    }
}

/// Write one token per line, newline-terminated, creating parent directories
///
/// # Errors
/// `BatchError::Write` naming the path.
pub async fn write_tokens(path: &Path, tokens: &[String]) -> Result<(), BatchError> {
    let write_error = |source| BatchError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }

    let file = tokio::fs::File::create(path).await.map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for token in tokens {
        writer.write_all(token.as_bytes()).await.map_err(write_error)?;
        writer.write_all(b"\n").await.map_err(write_error)?;
    }
    writer.flush().await.map_err(write_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_sizes() {
        assert_eq!(chunk_sizes(10, 4), vec![3, 3, 2, 2]);
        assert_eq!(chunk_sizes(3, 8), vec![1, 1, 1]);
        assert_eq!(chunk_sizes(5, 1), vec![5]);
        assert_eq!(chunk_sizes(5, 0), vec![5]);
        assert!(chunk_sizes(0, 4).is_empty());
    }

    #[test]
    fn test_chunks_cover_count() {
        for count in 1..50 {
            for workers in 1..9 {
                let sizes = chunk_sizes(count, workers);
                assert_eq!(sizes.iter().sum::<usize>(), count);
                assert!(sizes.len() <= workers);
                assert!(sizes.windows(2).all(|w| w[0] >= w[1] && w[0] - w[1] <= 1));
            }
        }
    }

    #[test]
    fn test_output_file_names_are_distinct() {
        let mut names: Vec<_> = TokenAlgorithm::ALL.into_iter().map(output_file_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}

//! The fetch -> verify -> persist pipeline.
//!
//! One linear pass: fetch the published checksum, fetch the artifact, verify
//! the bytes already in hand, then persist. Each stage is terminal on failure
//! and nothing touches the filesystem until verification has passed. The
//! artifact URL is fetched exactly once per run.

use crate::config::VfetchConfig;
use crate::digest::{self, DigestError, ExpectedDigest};
use crate::fetch::{self, FetchError};
use crate::storage;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Terminal failure of one pipeline stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid release coordinates: {0:#}")]
    Config(#[source] anyhow::Error),
    #[error("checksum fetch failed: {0}")]
    ChecksumFetch(#[source] FetchError),
    #[error("checksum file unusable: {0}")]
    ChecksumFormat(#[source] DigestError),
    #[error("artifact fetch failed: {0}")]
    ArtifactFetch(#[source] FetchError),
    #[error("integrity mismatch: expected {expected}, computed {computed}")]
    IntegrityMismatch { expected: String, computed: String },
    #[error("could not save verified artifact: {0:#}")]
    Persist(#[source] anyhow::Error),
}

impl PipelineError {
    /// Process exit code for this failure kind: 2 for an integrity mismatch,
    /// 3 for a post-verification write failure, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::IntegrityMismatch { .. } => 2,
            PipelineError::Persist(_) => 3,
            _ => 1,
        }
    }
}

/// Receives stage-completion notifications. The core never prints; the CLI
/// implements this to produce its step-by-step output.
pub trait StageObserver {
    fn expected_digest(&mut self, _digest: &ExpectedDigest) {}
    fn artifact_downloaded(&mut self, _len: usize) {}
    fn verified(&mut self, _digest: &ExpectedDigest) {}
    fn saved(&mut self, _path: &Path) {}
}

/// No-op observer for callers that only want the result.
pub struct Silent;

impl StageObserver for Silent {}

/// Run the full pipeline against the configured release. On success returns
/// the path of the verified artifact; the destination directory can be
/// overridden (e.g. from the command line) with `dest_override`.
pub fn run(
    cfg: &VfetchConfig,
    dest_override: Option<&Path>,
    obs: &mut dyn StageObserver,
) -> Result<PathBuf, PipelineError> {
    cfg.release.validate().map_err(PipelineError::Config)?;

    let checksum_body = fetch::fetch_bytes(&cfg.release.checksum_url, &cfg.http)
        .map_err(PipelineError::ChecksumFetch)?;
    let expected = digest::parse_checksum_body(&String::from_utf8_lossy(&checksum_body))
        .map_err(PipelineError::ChecksumFormat)?;
    tracing::debug!(digest = %expected, "expected digest fetched");
    obs.expected_digest(&expected);

    let artifact = fetch::fetch_bytes(&cfg.release.artifact_url, &cfg.http)
        .map_err(PipelineError::ArtifactFetch)?;
    tracing::debug!(len = artifact.len(), "artifact downloaded");
    obs.artifact_downloaded(artifact.len());

    // Verify the bytes in hand, not a re-fetch.
    let computed = digest::sha256_hex(&artifact);
    if computed != expected.as_hex() {
        tracing::warn!(%expected, %computed, "integrity mismatch, nothing written");
        return Err(PipelineError::IntegrityMismatch {
            expected: expected.as_hex().to_string(),
            computed,
        });
    }
    obs.verified(&expected);

    let dest_dir = cfg.destination_with_override(dest_override);
    let path = storage::persist(&artifact, &dest_dir, &cfg.release.filename)
        .map_err(PipelineError::Persist)?;
    tracing::info!(path = %path.display(), "verified artifact saved");
    obs.saved(&path);
    Ok(path)
}

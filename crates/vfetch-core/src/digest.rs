//! SHA-256 digest computation and checksum-file parsing.
//!
//! The published checksum file is plain text in `sha256sum` format: the first
//! whitespace-delimited token is the digest, the rest is a filename column.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

const BUF_SIZE: usize = 64 * 1024;

/// Length of a SHA-256 digest in hex characters.
pub const SHA256_HEX_LEN: usize = 64;

/// The published checksum file body could not be used as a digest.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("checksum file body is empty")]
    Empty,
    #[error("checksum token {token:?} is not a 64-char hex SHA-256 digest")]
    Malformed { token: String },
}

/// Expected SHA-256 digest published next to an artifact, held as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedDigest(String);

impl ExpectedDigest {
    /// Validate and normalize a hex token. Mixed case is accepted and stored
    /// lowercase, so later comparisons are effectively case-insensitive.
    pub fn parse(token: &str) -> Result<Self, DigestError> {
        if token.len() != SHA256_HEX_LEN || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DigestError::Malformed {
                token: token.to_string(),
            });
        }
        Ok(ExpectedDigest(token.to_ascii_lowercase()))
    }

    /// Lowercase hex form.
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// True iff the SHA-256 of `data` equals this digest.
    pub fn matches(&self, data: &[u8]) -> bool {
        sha256_hex(data) == self.0
    }
}

impl fmt::Display for ExpectedDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the expected digest from a checksum file body: the first
/// whitespace-delimited token, validated as hex of the right length.
pub fn parse_checksum_body(body: &str) -> Result<ExpectedDigest, DigestError> {
    let token = body.split_whitespace().next().ok_or(DigestError::Empty)?;
    ExpectedDigest::parse(token)
}

/// SHA-256 of in-memory bytes as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large files.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let digest = hasher.finalize();
    Ok(hex::encode(digest))
}

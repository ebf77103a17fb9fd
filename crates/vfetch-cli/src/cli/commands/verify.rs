//! Verify command: check an already-downloaded file against a digest.

use anyhow::{Context, Result};
use std::path::Path;
use vfetch_core::digest::{self, ExpectedDigest};

/// Verify `path` against `digest`. Returns exit code 0 on match, 2 on
/// mismatch (same code the pipeline uses for an integrity failure).
pub fn run_verify(path: &Path, digest: &str) -> Result<i32> {
    let expected = ExpectedDigest::parse(digest)
        .with_context(|| format!("invalid expected digest {digest:?}"))?;
    let computed = digest::sha256_path(path)?;
    if computed == expected.as_hex() {
        println!("OK: {} matches {}", path.display(), expected);
        Ok(0)
    } else {
        eprintln!(
            "MISMATCH: {} has SHA-256 {computed}, expected {expected}",
            path.display()
        );
        Ok(2)
    }
}

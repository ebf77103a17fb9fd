//! Checksum command: compute SHA-256 of a file.

use anyhow::Result;
use std::path::Path;
use vfetch_core::digest;

/// Compute and print SHA-256 of the given file.
pub fn run_checksum(path: &Path) -> Result<()> {
    let digest = digest::sha256_path(path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}

//! `vfetch fetch` – run the fetch-verify-persist pipeline.

use std::path::Path;
use vfetch_core::config::VfetchConfig;
use vfetch_core::digest::ExpectedDigest;
use vfetch_core::pipeline::{self, StageObserver};

/// Prints one status line per completed pipeline stage.
struct StepPrinter;

impl StageObserver for StepPrinter {
    fn expected_digest(&mut self, digest: &ExpectedDigest) {
        println!("Step 1: expected SHA-256 digest = {digest}");
    }

    fn artifact_downloaded(&mut self, len: usize) {
        println!("Step 2: downloaded installer ({len} bytes)");
    }

    fn verified(&mut self, digest: &ExpectedDigest) {
        println!("Step 3: integrity verified, SHA-256 matches {digest}");
    }

    fn saved(&mut self, path: &Path) {
        println!("Step 4: installer saved to {}", path.display());
    }
}

/// Run the pipeline and return the process exit code: 0 success, 1 fetch or
/// checksum-format failure, 2 integrity mismatch, 3 persistence failure.
pub fn run_fetch(cfg: &VfetchConfig, dest_dir: Option<&Path>) -> i32 {
    match pipeline::run(cfg, dest_dir, &mut StepPrinter) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("vfetch error: {err}");
            err.exit_code()
        }
    }
}

//! CLI for vfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vfetch_core::config;

use commands::{run_checksum, run_fetch, run_verify};

/// Top-level CLI for vfetch.
#[derive(Debug, Parser)]
#[command(name = "vfetch")]
#[command(about = "vfetch: fetch a pinned release artifact and verify its SHA-256 before saving", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the configured release, verify it, and save it.
    Fetch {
        /// Destination directory (default: config, then the platform temp dir).
        #[arg(long, value_name = "DIR")]
        dest_dir: Option<PathBuf>,
    },

    /// Compute SHA-256 of a local file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Verify a local file against an expected hex SHA-256 digest.
    Verify {
        /// Path to the file.
        path: PathBuf,
        /// Expected digest (64 hex chars, any case).
        digest: String,
    },
}

impl CliCommand {
    /// Parse arguments, dispatch, and return the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { dest_dir } => Ok(run_fetch(&cfg, dest_dir.as_deref())),
            CliCommand::Checksum { path } => {
                run_checksum(&path)?;
                Ok(0)
            }
            CliCommand::Verify { path, digest } => run_verify(&path, &digest),
        }
    }
}

#[cfg(test)]
mod tests;

//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_fetch() {
    match parse(&["vfetch", "fetch"]) {
        CliCommand::Fetch { dest_dir } => assert!(dest_dir.is_none()),
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_dest_dir() {
    match parse(&["vfetch", "fetch", "--dest-dir", "/tmp"]) {
        CliCommand::Fetch { dest_dir } => {
            assert_eq!(dest_dir.as_deref(), Some(Path::new("/tmp")));
        }
        _ => panic!("expected Fetch with --dest-dir"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["vfetch", "checksum", "/tmp/file.bin"]) {
        CliCommand::Checksum { path } => {
            assert_eq!(path, Path::new("/tmp/file.bin"));
        }
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_verify() {
    let digest = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    match parse(&["vfetch", "verify", "/tmp/file.bin", digest]) {
        CliCommand::Verify { path, digest: d } => {
            assert_eq!(path, Path::new("/tmp/file.bin"));
            assert_eq!(d, digest);
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["vfetch", "frobnicate"]).is_err());
}

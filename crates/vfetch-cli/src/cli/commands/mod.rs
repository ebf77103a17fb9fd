//! CLI command handlers, one file per command.

mod checksum;
mod fetch;
mod verify;

pub use checksum::run_checksum;
pub use fetch::run_fetch;
pub use verify::run_verify;

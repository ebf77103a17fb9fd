pub mod config;
pub mod digest;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod storage;

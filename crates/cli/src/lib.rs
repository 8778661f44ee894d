// crates/cli/src/lib.rs
// rustyline and clap pull different windows-sys versions
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;
pub mod prompt;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

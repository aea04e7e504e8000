//! # CLI Layer
//!
//! The CLI is the only part of awsid that:
//! - Parses arguments (clap)
//! - Sets up logging (tracing-subscriber, stderr only)
//! - Writes to stdout/stderr
//!
//! Exit codes are decided in `main.rs`.

mod commands;
mod print;
mod setup;

pub use commands::run;

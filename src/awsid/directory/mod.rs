//! # Account Directory
//!
//! The remote account listing is abstracted behind [`AccountDirectory`] so the refresh logic
//! never depends on how accounts are fetched.
//!
//! ## Implementations
//!
//! - [`aws_cli::AwsCliDirectory`]: Production directory backed by the `aws` CLI
//!   (`aws organizations list-accounts`). Authentication, region selection and pagination are
//!   left to the CLI.
//! - [`memory::StaticDirectory`]: Fixed in-memory answers for testing.
//!
//! Any failure to list accounts is reported as [`AwsidError::Remote`](crate::error::AwsidError).
//! Callers decide whether that is fatal; the CLI treats it as a warning.

use crate::error::Result;
use chrono::{DateTime, FixedOffset};

pub mod aws_cli;
pub mod memory;

/// One entry as returned by the directory. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteAccount {
    pub id: Option<String>,
    pub arn: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub joined_method: Option<String>,
    pub joined_timestamp: Option<DateTime<FixedOffset>>,
}

/// Source of authoritative account records.
pub trait AccountDirectory {
    /// List every account visible to the caller.
    fn list_accounts(&self) -> Result<Vec<RemoteAccount>>;
}

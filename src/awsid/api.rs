//! # API Facade
//!
//! A thin facade over the command layer. It owns the immutable [`AwsidConfig`] and the
//! [`AccountDirectory`] used for refreshes, and exposes one method per operation.
//!
//! Like the command layer, the facade never prints and never exits. Whether a failed refresh
//! is fatal is up to the caller; the CLI logs it and carries on with the cached file.
//!
//! `AwsidApi<D: AccountDirectory>` is generic over the directory:
//! - Production: `AwsidApi<AwsCliDirectory>`
//! - Testing: `AwsidApi<StaticDirectory>`

use crate::cache;
use crate::commands;
use crate::config::AwsidConfig;
use crate::directory::AccountDirectory;
use crate::error::Result;
use crate::model::Account;
use crate::query::SortSpec;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct AwsidApi<D: AccountDirectory> {
    directory: D,
    config: AwsidConfig,
}

impl<D: AccountDirectory> AwsidApi<D> {
    pub fn new(directory: D, config: AwsidConfig) -> Self {
        Self { directory, config }
    }

    pub fn refresh(&self) -> Result<commands::CmdResult> {
        commands::refresh::run(&self.directory, &self.config.cache_file)
    }

    pub fn load(&self) -> Result<Vec<Account>> {
        cache::read(&self.config.cache_file)
    }

    /// Search the cache for `term`; an empty term lists everything.
    pub fn lookup(&self, term: &str, spec: Option<SortSpec>) -> Result<commands::CmdResult> {
        let accounts = self.load()?;
        if term.is_empty() {
            return commands::list::run(accounts, spec);
        }
        commands::lookup::run(&accounts, term, spec)
    }

    pub fn list(&self, spec: Option<SortSpec>) -> Result<commands::CmdResult> {
        commands::list::run(self.load()?, spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::memory::StaticDirectory;
    use crate::directory::RemoteAccount;
    use crate::error::AwsidError;
    use std::fs;

    fn api_with(directory: StaticDirectory, dir: &tempfile::TempDir) -> AwsidApi<StaticDirectory> {
        AwsidApi::new(
            directory,
            AwsidConfig::new(dir.path().join("account_info")),
        )
    }

    #[test]
    fn refresh_then_lookup_uses_fresh_cache() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_with(
            StaticDirectory::new(vec![RemoteAccount {
                id: Some("111111111111".into()),
                name: Some("prod".into()),
                ..Default::default()
            }]),
            &dir,
        );

        api.refresh().unwrap();
        let result = api.lookup("prod", None).unwrap();
        assert!(result.exact_match);
        assert_eq!(result.accounts[0].account_id(), "111111111111");
    }

    #[test]
    fn failed_refresh_falls_back_to_stale_cache() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("account_info"),
            "alice,111111111111\nbob,222222222222\n",
        )
        .unwrap();
        let api = api_with(StaticDirectory::failing("no credentials"), &dir);

        assert!(matches!(api.refresh(), Err(AwsidError::Remote(_))));
        let result = api.lookup("bob", None).unwrap();
        assert_eq!(result.accounts[0].account_id(), "222222222222");
    }

    #[test]
    fn empty_term_lists_everything() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("account_info"), "a,1\nb,2\n").unwrap();
        let api = api_with(StaticDirectory::new(vec![]), &dir);

        assert_eq!(api.lookup("", None).unwrap().accounts.len(), 2);
        assert_eq!(api.list(None).unwrap().accounts.len(), 2);
    }

    #[test]
    fn missing_cache_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_with(StaticDirectory::failing("offline"), &dir);
        assert!(matches!(api.list(None), Err(AwsidError::Io(_))));
    }
}

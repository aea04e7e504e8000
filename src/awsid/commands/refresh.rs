use crate::cache;
use crate::commands::{CmdMessage, CmdResult};
use crate::directory::AccountDirectory;
use crate::error::Result;
use crate::model::Account;
use std::path::Path;

/// Rewrite the cache at `path` from the directory.
///
/// The parent directory is created first. When listing fails, the existing cache is left
/// untouched and the error is returned for the caller to downgrade.
pub fn run<D: AccountDirectory>(directory: &D, path: &Path) -> Result<CmdResult> {
    cache::ensure_parent_dir(path)?;

    let remote = directory.list_accounts()?;
    let total = remote.len();
    let accounts: Vec<Account> = remote.iter().filter_map(Account::from_remote_entry).collect();
    let skipped = total - accounts.len();

    cache::write(path, &accounts)?;
    tracing::debug!(written = accounts.len(), skipped, path = %path.display(), "refreshed account cache");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Refreshed {} accounts into {}",
        accounts.len(),
        path.display()
    )));
    if skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} directory entries without an id or name",
            skipped
        )));
    }
    Ok(result)
}

use crate::commands::CmdResult;
use crate::error::{AwsidError, Result};
use crate::model::Account;
use crate::query::{search, sort, SortSpec};

/// Resolve `term` against the loaded accounts. No match is a [`AwsidError::NotFound`].
pub fn run(accounts: &[Account], term: &str, spec: Option<SortSpec>) -> Result<CmdResult> {
    let mut found = search(accounts, term);
    if found.accounts.is_empty() {
        return Err(AwsidError::NotFound(term.to_string()));
    }

    sort(&mut found.accounts, spec);
    Ok(CmdResult::default()
        .with_accounts(found.accounts)
        .with_exact_match(found.exact_match))
}

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Account;
use crate::query::{sort, SortSpec};

/// Every cached account, optionally sorted. An empty cache is not an error.
pub fn run(accounts: Vec<Account>, spec: Option<SortSpec>) -> Result<CmdResult> {
    let mut accounts = accounts;
    sort(&mut accounts, spec);
    Ok(CmdResult::default().with_accounts(accounts))
}

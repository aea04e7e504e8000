//! # Account Records
//!
//! [`Account`] is the one canonical record shape. It can be built from three sources:
//!
//! - a **legacy** cache row: `alias_name,account_id`
//! - an **extended** cache row: `id,arn,email,name,status,joined_method,joined_timestamp`
//! - a [`RemoteAccount`] returned by the account directory
//!
//! The constructors in this module are the only way to obtain an `Account`; everything that knows
//! about the two cache shapes lives here. Cache rows are first decoded into a [`CacheRow`]
//! variant by field count, then turned into an `Account`.
//!
//! The legacy names are kept as mirrors: `account_id` always equals `id`, and `alias_name`
//! equals `name` whenever a name is known.

use crate::directory::RemoteAccount;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Column names written to the header row of the cache file and of CSV output.
pub const EXTENDED_HEADER: [&str; 7] = [
    "id",
    "arn",
    "email",
    "name",
    "status",
    "joined_method",
    "joined_timestamp",
];

/// First-field values that mark a row as a header rather than data.
pub const HEADER_MARKERS: [&str; 3] = ["alias_name", "AliasName", "id"];

/// Fixed-width, offset-carrying timestamp layout used in the cache file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9f%:z";

pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    id: String,
    arn: String,
    email: String,
    name: String,
    status: String,
    joined_method: String,
    joined_timestamp: String,
    alias_name: String,
    account_id: String,
}

/// The seven columns of an extended cache row, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendedRow {
    pub id: String,
    pub arn: String,
    pub email: String,
    pub name: String,
    pub status: String,
    pub joined_method: String,
    pub joined_timestamp: String,
}

/// A cache row after shape detection, before it becomes an [`Account`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheRow {
    Legacy { alias: String, id: String },
    Extended(ExtendedRow),
}

impl CacheRow {
    /// Picks the row shape from the field count: seven or more fields is extended,
    /// two to six is legacy (extra fields ignored), anything else is not a row.
    pub fn decode<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        let field = |i: usize| fields[i].as_ref().trim().to_string();
        match fields.len() {
            n if n >= 7 => Some(CacheRow::Extended(ExtendedRow {
                id: field(0),
                arn: field(1),
                email: field(2),
                name: field(3),
                status: field(4),
                joined_method: field(5),
                joined_timestamp: field(6),
            })),
            2..=6 => Some(CacheRow::Legacy {
                alias: field(0),
                id: field(1),
            }),
            _ => None,
        }
    }

    /// Converts the row into an account, or `None` when the leading field or the id is empty.
    pub fn into_account(self) -> Option<Account> {
        match self {
            CacheRow::Legacy { alias, id } => {
                if alias.is_empty() || id.is_empty() {
                    return None;
                }
                Some(Account::from_legacy_row(alias, id))
            }
            CacheRow::Extended(row) => {
                if row.id.is_empty() {
                    return None;
                }
                Some(Account::from_extended_row(row))
            }
        }
    }
}

impl Account {
    pub fn from_legacy_row(alias: impl Into<String>, id: impl Into<String>) -> Self {
        let alias = alias.into();
        let id = id.into();
        Self {
            account_id: id.clone(),
            id,
            arn: String::new(),
            email: String::new(),
            alias_name: alias.clone(),
            name: alias,
            status: String::new(),
            joined_method: String::new(),
            joined_timestamp: String::new(),
        }
    }

    pub fn from_extended_row(row: ExtendedRow) -> Self {
        Self {
            account_id: row.id.clone(),
            alias_name: row.name.clone(),
            id: row.id,
            arn: row.arn,
            email: row.email,
            name: row.name,
            status: row.status,
            joined_method: row.joined_method,
            joined_timestamp: row.joined_timestamp,
        }
    }

    /// Maps a directory entry. Entries without an id or a name are skipped.
    pub fn from_remote_entry(remote: &RemoteAccount) -> Option<Self> {
        let id = remote.id.as_deref().filter(|s| !s.is_empty())?;
        let name = remote.name.as_deref().filter(|s| !s.is_empty())?;
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Some(Self::from_extended_row(ExtendedRow {
            id: id.to_string(),
            arn: text(&remote.arn),
            email: text(&remote.email),
            name: name.to_string(),
            status: text(&remote.status),
            joined_method: text(&remote.joined_method),
            joined_timestamp: remote
                .joined_timestamp
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_default(),
        }))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arn(&self) -> &str {
        &self.arn
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn joined_method(&self) -> &str {
        &self.joined_method
    }

    pub fn joined_timestamp(&self) -> &str {
        &self.joined_timestamp
    }

    pub fn alias_name(&self) -> &str {
        &self.alias_name
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The seven extended fields in cache/CSV column order.
    pub fn extended_fields(&self) -> [&str; 7] {
        [
            &self.id,
            &self.arn,
            &self.email,
            &self.name,
            &self.status,
            &self.joined_method,
            &self.joined_timestamp,
        ]
    }
}

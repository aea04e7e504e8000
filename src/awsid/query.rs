//! Searching and ordering account sets.
//!
//! Search is a case-sensitive substring match on the alias. An exact alias match wins over
//! every partial match: the result collapses to the first exact match in input order, even
//! when the directory holds several accounts with the same alias.

use crate::error::{AwsidError, Result};
use crate::model::Account;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Email,
    Status,
    JoinedMethod,
    JoinedTimestamp,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::Name,
        SortField::Email,
        SortField::Status,
        SortField::JoinedMethod,
        SortField::JoinedTimestamp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::Status => "status",
            SortField::JoinedMethod => "joined_method",
            SortField::JoinedTimestamp => "joined_timestamp",
        }
    }

    fn compare(&self, a: &Account, b: &Account) -> Ordering {
        match self {
            SortField::Id => a.id().cmp(b.id()),
            SortField::Name => cmp_ignore_case(a.name(), b.name()),
            SortField::Email => cmp_ignore_case(a.email(), b.email()),
            SortField::Status => a.status().cmp(b.status()),
            SortField::JoinedMethod => a.joined_method().cmp(b.joined_method()),
            SortField::JoinedTimestamp => a.joined_timestamp().cmp(b.joined_timestamp()),
        }
    }
}

impl FromStr for SortField {
    type Err = AwsidError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "email" => Ok(SortField::Email),
            "status" => Ok(SortField::Status),
            "joined_method" | "joinedMethod" => Ok(SortField::JoinedMethod),
            "joined_timestamp" | "joinedTimestamp" => Ok(SortField::JoinedTimestamp),
            other => {
                let valid: Vec<&str> = SortField::ALL.iter().map(|f| f.as_str()).collect();
                Err(AwsidError::Config(format!(
                    "invalid sort field '{}'. Valid fields are: {}",
                    other,
                    valid.join(", ")
                )))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub descending: bool,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            descending: true,
        }
    }
}

/// Result of [`search`]: the matching accounts and whether they came from an exact alias match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub accounts: Vec<Account>,
    pub exact_match: bool,
}

/// Find accounts whose alias contains `term`. Callers handle the empty term as "list all".
pub fn search(accounts: &[Account], term: &str) -> SearchResult {
    if let Some(exact) = accounts.iter().find(|a| a.alias_name() == term) {
        return SearchResult {
            accounts: vec![exact.clone()],
            exact_match: true,
        };
    }

    SearchResult {
        accounts: accounts
            .iter()
            .filter(|a| a.alias_name().contains(term))
            .cloned()
            .collect(),
        exact_match: false,
    }
}

/// Stable in-place sort. `None` keeps input order.
pub fn sort(accounts: &mut [Account], spec: Option<SortSpec>) {
    let Some(spec) = spec else {
        return;
    };

    accounts.sort_by(|a, b| {
        let ord = spec.field.compare(a, b);
        if spec.descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

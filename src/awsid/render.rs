//! # Rendering
//!
//! Turns an account set into the text written to stdout. Rendering is pure: every function
//! returns a `String` and the CLI decides where it goes.
//!
//! | Format    | Output                                                           |
//! |-----------|------------------------------------------------------------------|
//! | `json`    | `{"account_info": [...]}`, four-space indented                   |
//! | `table`   | bordered grid with a fixed seven-column header                   |
//! | `csv`     | snake_case header row, then one row per account                  |
//! | `default` | bare account id for a single exact match, otherwise one labelled |
//! |           | line per account                                                 |

use crate::error::{AwsidError, Result};
use crate::model::{Account, EXTENDED_HEADER};
use crate::options::OutputFormat;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

pub const TABLE_HEADER: [&str; 7] = [
    "ID",
    "ARN",
    "Email",
    "Name",
    "Status",
    "Joined Method",
    "Joined Timestamp",
];

#[derive(Serialize)]
struct AccountList<'a> {
    account_info: &'a [Account],
}

/// Render `accounts` in the given format.
///
/// `exact_match` only affects the default format, where a single exact match prints just
/// the account id.
pub fn render(accounts: &[Account], format: OutputFormat, exact_match: bool) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(accounts),
        OutputFormat::Table => Ok(render_table(accounts)),
        OutputFormat::Csv => render_csv(accounts),
        OutputFormat::Default => Ok(render_default(accounts, exact_match)),
    }
}

pub fn render_json(accounts: &[Account]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    AccountList {
        account_info: accounts,
    }
    .serialize(&mut serializer)?;

    let mut out = String::from_utf8_lossy(&buf).into_owned();
    out.push('\n');
    Ok(out)
}

pub fn render_table(accounts: &[Account]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(TABLE_HEADER.to_vec());

    for account in accounts {
        table.add_row(account.extended_fields().to_vec());
    }

    format!("{}\n", table)
}

pub fn render_csv(accounts: &[Account]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXTENDED_HEADER)?;
    for account in accounts {
        writer.write_record(account.extended_fields())?;
    }

    let buf = writer
        .into_inner()
        .map_err(|e| AwsidError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn render_default(accounts: &[Account], exact_match: bool) -> String {
    if exact_match && accounts.len() == 1 {
        return format!("{}\n", accounts[0].account_id());
    }

    accounts
        .iter()
        .map(|a| {
            format!(
                "ID: {} | ARN: {} | Email: {} | Name: {} | Status: {} | Method: {} | Joined: {}\n",
                a.id(),
                a.arn(),
                a.email(),
                a.name(),
                a.status(),
                a.joined_method(),
                a.joined_timestamp()
            )
        })
        .collect()
}

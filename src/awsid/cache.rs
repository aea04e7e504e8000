//! # Account Cache File
//!
//! The cache is a single comma-separated file, by default `~/.aws/account_info`.
//!
//! ```text
//! # comment lines start with '#'
//! id,arn,email,name,status,joined_method,joined_timestamp   <- optional header
//! 111111111111,arn:aws:...,prod@example.com,prod,ACTIVE,CREATED,2020-05-01T10:20:30.000000000+00:00
//! legacy-alias,222222222222                                  <- legacy rows still load
//! ```
//!
//! Reading is lenient about rows and strict about structure: rows of the wrong shape or
//! without an id are skipped, but broken quoting fails the whole read. Writing always
//! replaces the file with a header plus one extended row per account.

use crate::error::{AwsidError, Result};
use crate::model::{Account, CacheRow, EXTENDED_HEADER, HEADER_MARKERS};
use std::fs;
use std::path::Path;

/// Load every usable account from the cache file, in file order.
pub fn read(path: &Path) -> Result<Vec<Account>> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|e| AwsidError::Parse(format!("{}: {}", path.display(), e)))?;
    parse(&content)
}

/// Parse cache content that has already been read into memory.
pub fn parse(content: &str) -> Result<Vec<Account>> {
    let content = normalize_quoting(content)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut accounts = Vec::new();
    let mut dropped = 0usize;

    for (position, record) in reader.records().enumerate() {
        let record = record?;
        if position == 0 && HEADER_MARKERS.contains(&record.get(0).unwrap_or_default()) {
            continue;
        }

        let fields: Vec<&str> = record.iter().collect();
        match CacheRow::decode(&fields).and_then(CacheRow::into_account) {
            Some(account) => accounts.push(account),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "skipped unusable cache rows");
    }

    Ok(accounts)
}

/// Replace the cache file with the given accounts in extended form.
pub fn write(path: &Path, accounts: &[Account]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(EXTENDED_HEADER)?;
    for account in accounts {
        writer.write_record(account.extended_fields())?;
    }
    writer.flush()?;
    Ok(())
}

/// Create the directory holding `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.exists() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(parent)?;
    Ok(())
}

/// Rejects unterminated quoted fields and quotes in the middle of unquoted fields, and drops
/// blanks between a delimiter and an opening quote so the csv reader sees a quoted field.
fn normalize_quoting(content: &str) -> Result<String> {
    let mut out = String::with_capacity(content.len());
    let mut in_quotes = false;
    let mut opened_at = 0;

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        let line_no = idx + 1;
        if !in_quotes && line.starts_with('#') {
            out.push_str(line);
            continue;
        }

        let mut chars = line.chars().peekable();
        let mut at_field_start = !in_quotes;
        let mut blanks = String::new();
        while let Some(c) = chars.next() {
            if in_quotes {
                out.push(c);
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        out.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                continue;
            }

            match c {
                '"' if at_field_start => {
                    blanks.clear();
                    in_quotes = true;
                    opened_at = line_no;
                }
                '"' => {
                    return Err(AwsidError::Parse(format!(
                        "line {}: bare quote in unquoted field",
                        line_no
                    )));
                }
                ',' => {
                    out.push_str(&blanks);
                    blanks.clear();
                    out.push(c);
                    at_field_start = true;
                    continue;
                }
                ' ' | '\t' if at_field_start => {
                    blanks.push(c);
                    continue;
                }
                _ => {
                    out.push_str(&blanks);
                    blanks.clear();
                }
            }
            out.push(c);
            at_field_start = false;
        }
        out.push_str(&blanks);
    }

    if in_quotes {
        return Err(AwsidError::Parse(format!(
            "line {}: unterminated quoted field",
            opened_at
        )));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExtendedRow;

    fn extended(id: &str, name: &str) -> Account {
        Account::from_extended_row(ExtendedRow {
            id: id.into(),
            arn: format!("arn:aws:organizations::000000000000:account/o-x/{}", id),
            email: format!("{}@example.com", name),
            name: name.into(),
            status: "ACTIVE".into(),
            joined_method: "CREATED".into(),
            joined_timestamp: "2020-05-01T10:20:30.000000000+00:00".into(),
        })
    }

    #[test]
    fn reads_legacy_rows_with_header_and_comments() {
        let accounts = parse("# accounts\nalias_name,account_id\nalice,111111111111\nbob, 222222222222\n").unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].alias_name(), "alice");
        assert_eq!(accounts[1].account_id(), "222222222222");
    }

    #[test]
    fn header_detection_only_applies_to_first_row() {
        let accounts = parse("alice,1\nid,2\n").unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[1].name(), "id");

        let accounts = parse("AliasName,AccountId\nalice,1\n").unwrap();
        assert_eq!(accounts.len(), 1);
    }

    #[test]
    fn mixes_shapes_and_drops_bad_rows() {
        let content = "\
id,arn,email,name,status,joined_method,joined_timestamp
111,arn:1,a@example.com,team-a,ACTIVE,CREATED,2020-01-01T00:00:00.000000000+00:00
lonely
,arn:2,b@example.com,team-b,ACTIVE,CREATED,
legacy,222,extra
,333
";
        let accounts = parse(content).unwrap();
        let ids: Vec<&str> = accounts.iter().map(|a| a.id()).collect();
        assert_eq!(ids, vec!["111", "222"]);
        assert_eq!(accounts[1].name(), "legacy");
    }

    #[test]
    fn unterminated_quote_is_a_parse_error() {
        let err = parse("alice,\"111\nbob,222\n").unwrap_err();
        assert!(matches!(err, AwsidError::Parse(msg) if msg.contains("line 1")));
    }

    #[test]
    fn quoted_fields_with_commas_are_accepted() {
        let accounts = parse("\"team, a\",111\n").unwrap();
        assert_eq!(accounts[0].name(), "team, a");
    }

    #[test]
    fn quoted_fields_after_blanks_are_unquoted() {
        let accounts = parse("alice, \"111111111111\"\nbob,\t\"team, b\" \n").unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].name(), "alice");
        assert_eq!(accounts[0].id(), "111111111111");
        assert_eq!(accounts[1].name(), "bob");
        assert_eq!(accounts[1].id(), "team, b");
    }

    #[test]
    fn blanks_inside_unquoted_fields_are_kept() {
        let accounts = parse("  my team ,  111 \n").unwrap();
        assert_eq!(accounts[0].name(), "my team");
        assert_eq!(accounts[0].id(), "111");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, AwsidError::Io(_)));
    }

    #[test]
    fn write_then_read_round_trips_extended_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("account_info");
        ensure_parent_dir(&path).unwrap();

        let accounts = vec![extended("111", "team-a"), extended("222", "team, b")];
        write(&path, &accounts).unwrap();

        assert_eq!(read(&path).unwrap(), accounts);
    }

    #[test]
    fn write_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("account_info");
        fs::write(&path, "old,999\nolder,998\nolder-still,997\n").unwrap();

        write(&path, &[extended("111", "team-a")]).unwrap();

        let accounts = read(&path).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id(), "111");
    }

    #[cfg(unix)]
    #[test]
    fn parent_dir_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aws").join("account_info");
        ensure_parent_dir(&path).unwrap();

        let mode = fs::metadata(dir.path().join("aws"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}

use super::{AccountDirectory, RemoteAccount};
use crate::error::{AwsidError, Result};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::Deserialize;
use std::process::Command;

/// Lists accounts by running `aws organizations list-accounts --output json`.
#[derive(Debug, Clone)]
pub struct AwsCliDirectory {
    program: String,
    profile: Option<String>,
    region: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListAccountsOutput {
    #[serde(default)]
    accounts: Vec<RawAccount>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawAccount {
    id: Option<String>,
    arn: Option<String>,
    email: Option<String>,
    name: Option<String>,
    status: Option<String>,
    joined_method: Option<String>,
    joined_timestamp: Option<serde_json::Value>,
}

impl AwsCliDirectory {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            profile: None,
            region: None,
        }
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["organizations", "list-accounts", "--output", "json"]);
        if let Some(profile) = &self.profile {
            cmd.args(["--profile", profile]);
        }
        if let Some(region) = &self.region {
            cmd.args(["--region", region]);
        }
        cmd
    }
}

impl AccountDirectory for AwsCliDirectory {
    fn list_accounts(&self) -> Result<Vec<RemoteAccount>> {
        let output = self
            .command()
            .output()
            .map_err(|e| AwsidError::Remote(format!("Failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AwsidError::Remote(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        parse_list_accounts(&output.stdout)
    }
}

/// Decodes the JSON document printed by `aws organizations list-accounts`.
pub fn parse_list_accounts(stdout: &[u8]) -> Result<Vec<RemoteAccount>> {
    let parsed: ListAccountsOutput = serde_json::from_slice(stdout)
        .map_err(|e| AwsidError::Remote(format!("Unexpected list-accounts output: {}", e)))?;

    Ok(parsed
        .accounts
        .into_iter()
        .map(|raw| RemoteAccount {
            joined_timestamp: raw.joined_timestamp.as_ref().and_then(parse_timestamp),
            id: raw.id,
            arn: raw.arn,
            email: raw.email,
            name: raw.name,
            status: raw.status,
            joined_method: raw.joined_method,
        })
        .collect())
}

/// Accepts RFC 3339 strings or epoch seconds, depending on the CLI's timestamp setting.
fn parse_timestamp(value: &serde_json::Value) -> Option<DateTime<FixedOffset>> {
    match value {
        serde_json::Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .or_else(|| s.parse::<f64>().ok().and_then(from_epoch_seconds)),
        serde_json::Value::Number(n) => n.as_f64().and_then(from_epoch_seconds),
        _ => None,
    }
}

fn from_epoch_seconds(secs: f64) -> Option<DateTime<FixedOffset>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round() as u32;
    Utc.timestamp_opt(whole as i64, nanos.min(999_999_999))
        .single()
        .map(|ts| ts.fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::format_timestamp;

    #[test]
    fn parses_cli_output() {
        let json = br#"{
            "Accounts": [
                {
                    "Id": "111111111111",
                    "Arn": "arn:aws:organizations::000000000000:account/o-abc/111111111111",
                    "Email": "prod@example.com",
                    "Name": "prod",
                    "Status": "ACTIVE",
                    "JoinedMethod": "CREATED",
                    "JoinedTimestamp": "2020-05-01T10:20:30.123000+00:00"
                },
                { "Id": "222222222222" }
            ]
        }"#;

        let accounts = parse_list_accounts(json).unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].name.as_deref(), Some("prod"));
        assert_eq!(
            format_timestamp(accounts[0].joined_timestamp.as_ref().unwrap()),
            "2020-05-01T10:20:30.123000000+00:00"
        );
        assert_eq!(accounts[1].name, None);
        assert_eq!(accounts[1].joined_timestamp, None);
    }

    #[test]
    fn accepts_epoch_timestamps() {
        let json = br#"{"Accounts": [{"Id": "1", "Name": "a", "JoinedTimestamp": 1588328430.5}]}"#;
        let accounts = parse_list_accounts(json).unwrap();
        assert_eq!(
            format_timestamp(accounts[0].joined_timestamp.as_ref().unwrap()),
            "2020-05-01T10:20:30.500000000+00:00"
        );
    }

    #[test]
    fn rejects_garbage_output() {
        let err = parse_list_accounts(b"not json").unwrap_err();
        assert!(matches!(err, AwsidError::Remote(_)));
    }

    #[test]
    fn missing_program_is_a_remote_error() {
        let directory = AwsCliDirectory::new("/nonexistent/awsid-test/aws");
        let err = directory.list_accounts().unwrap_err();
        assert!(matches!(err, AwsidError::Remote(_)));
    }
}

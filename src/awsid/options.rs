//! Turns the raw output and sort selectors into one deterministic choice.
//!
//! Output format can be chosen with `--format <name>` or with one of the shorthand flags
//! `--json`, `--table`, `--csv`. Setting two or more shorthand flags is always an error. A
//! valid `--format` value wins over a single shorthand flag.

use crate::error::{AwsidError, Result};
use crate::query::{SortField, SortSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Default,
}

/// Values accepted by `--format`.
pub const FORMAT_NAMES: [&str; 3] = ["json", "table", "csv"];

pub fn resolve_format(
    format_option: Option<&str>,
    json: bool,
    table: bool,
    csv: bool,
) -> Result<OutputFormat> {
    let flagged: Vec<OutputFormat> = [
        (json, OutputFormat::Json),
        (table, OutputFormat::Table),
        (csv, OutputFormat::Csv),
    ]
    .into_iter()
    .filter_map(|(set, format)| set.then_some(format))
    .collect();

    if flagged.len() > 1 {
        return Err(AwsidError::Config(
            "multiple output format flags specified. Please use only one format flag".to_string(),
        ));
    }

    match format_option.filter(|s| !s.is_empty()) {
        Some("json") => Ok(OutputFormat::Json),
        Some("table") => Ok(OutputFormat::Table),
        Some("csv") => Ok(OutputFormat::Csv),
        Some(other) => Err(AwsidError::Config(format!(
            "invalid format '{}'. Valid formats are: {}",
            other,
            FORMAT_NAMES.join(", ")
        ))),
        None => Ok(flagged.first().copied().unwrap_or(OutputFormat::Default)),
    }
}

pub fn resolve_sort(sort: Option<&str>, sort_desc: Option<&str>) -> Result<Option<SortSpec>> {
    let sort = sort.filter(|s| !s.is_empty());
    let sort_desc = sort_desc.filter(|s| !s.is_empty());

    match (sort, sort_desc) {
        (Some(_), Some(_)) => Err(AwsidError::Config(
            "cannot specify both --sort and --sort-desc".to_string(),
        )),
        (Some(field), None) => Ok(Some(SortSpec::ascending(field.parse::<SortField>()?))),
        (None, Some(field)) => Ok(Some(SortSpec::descending(field.parse::<SortField>()?))),
        (None, None) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_default() {
        assert_eq!(
            resolve_format(None, false, false, false).unwrap(),
            OutputFormat::Default
        );
        assert_eq!(
            resolve_format(Some(""), false, false, false).unwrap(),
            OutputFormat::Default
        );
    }

    #[test]
    fn single_flag_selects_format() {
        assert_eq!(
            resolve_format(None, false, true, false).unwrap(),
            OutputFormat::Table
        );
        assert_eq!(
            resolve_format(None, false, false, true).unwrap(),
            OutputFormat::Csv
        );
    }

    #[test]
    fn format_option_overrides_single_flag() {
        assert_eq!(
            resolve_format(Some("json"), false, true, false).unwrap(),
            OutputFormat::Json
        );
    }

    #[test]
    fn rejects_multiple_flags() {
        for (json, table, csv) in [(true, true, false), (true, false, true), (true, true, true)] {
            let err = resolve_format(None, json, table, csv).unwrap_err();
            assert!(matches!(err, AwsidError::Config(_)));
        }
        assert!(resolve_format(Some("json"), true, true, false).is_err());
    }

    #[test]
    fn rejects_unknown_format_names() {
        for name in ["yaml", "default", "JSON"] {
            assert!(matches!(
                resolve_format(Some(name), false, false, false),
                Err(AwsidError::Config(_))
            ));
        }
    }

    #[test]
    fn resolves_sort_direction() {
        assert_eq!(resolve_sort(None, None).unwrap(), None);
        assert_eq!(
            resolve_sort(Some("email"), None).unwrap(),
            Some(SortSpec::ascending(SortField::Email))
        );
        assert_eq!(
            resolve_sort(None, Some("name")).unwrap(),
            Some(SortSpec {
                field: SortField::Name,
                descending: true
            })
        );
    }

    #[test]
    fn rejects_conflicting_or_unknown_sort() {
        assert!(matches!(
            resolve_sort(Some("name"), Some("id")),
            Err(AwsidError::Config(msg)) if msg.contains("cannot specify both")
        ));
        assert!(matches!(
            resolve_sort(Some("bogus"), None),
            Err(AwsidError::Config(msg)) if msg.contains("invalid sort field")
        ));
    }
}

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::ExtractError;
use crate::extract::{clean_url, find_target_message};
use crate::models::{OutputRow, RequestParams};
use crate::parsers::{RawRow, RowReader, normalize_payload, parse_log_entries};
use crate::report::{format_line, write_report};

/// Outcome of one report run.
#[derive(Debug)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub rows: usize,
    pub rows_without_target: usize,
}

/// Transform one raw input row into its report row.
///
/// The payload is normalized, parsed as a log array, and scanned for the
/// transaction request message. A payload with no matching message is not an
/// error: the row keeps its date and gets empty URL and parameter fields. Any
/// other failure aborts with the matching [`ExtractError`].
pub fn transform_row(raw: &RawRow) -> Result<OutputRow, ExtractError> {
    let json = normalize_payload(&raw.payload)?;
    let entries = parse_log_entries(&json)?;

    let (url, params) = match find_target_message(&entries) {
        Some(entry) => {
            let url = clean_url(&entry.msg)?;
            let params = RequestParams::from_url(&url)?;
            (Some(url), Some(params))
        }
        None => (None, None),
    };

    Ok(OutputRow { date: raw.date.clone(), url, params })
}

/// Run the whole pipeline: read rows, transform each in input order, write
/// the timestamped report.
///
/// The run aborts on the first row error, and the report file is only created
/// once every row has transformed successfully, so a failed run leaves no
/// partial output behind.
pub fn process_file(input: &Path, output_dir: &Path) -> Result<RunSummary> {
    let file = File::open(input)
        .with_context(|| format!("failed to open input file: {}", input.display()))?;
    let reader = RowReader::new(BufReader::new(file));

    let mut lines = Vec::new();
    let mut rows_without_target = 0;
    for row in reader {
        let row = row?;
        let output = transform_row(&row)
            .with_context(|| format!("line {}: failed to transform row", row.line_number))?;
        if output.url.is_none() {
            rows_without_target += 1;
            eprintln!(
                "Warning: line {}: no transaction request message found",
                row.line_number
            );
        }
        lines.push(format_line(&output));
    }

    let report_path = write_report(output_dir, &lines)
        .with_context(|| format!("failed to write report under {}", output_dir.display()))?;

    Ok(RunSummary { report_path, rows: lines.len(), rows_without_target })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, payload: &str) -> RawRow {
        RawRow { line_number: 1, date: date.to_string(), payload: payload.to_string() }
    }

    const SCENARIO_PAYLOAD: &str = r#""[{\"msg\":\"Call to GET /transaction/customers/42/transactions?maxResults=10&firstResult=0&status=OK&partnerCode=P1&dateFrom=2024-01-01&dateTo=2024-01-02&orderField=date&orderType=asc took 5ms\",\"dateTime\":\"2024-01-01T10:00:00\"}]""#;

    #[test]
    fn test_transform_row_extracts_url_and_params() {
        let output = transform_row(&raw("2024-01-01", SCENARIO_PAYLOAD)).unwrap();

        assert_eq!(output.date, "2024-01-01");
        let url = output.url.unwrap();
        assert!(url.starts_with("/transaction/customers/42/transactions?maxResults=10"));
        assert!(url.ends_with("orderType=asc&"));
        let params = output.params.unwrap();
        assert_eq!(params.customer_id, 42);
        assert_eq!(params.max_result, 10);
        assert_eq!(params.first_result, 0);
        assert_eq!(params.status, "OK");
    }

    #[test]
    fn test_transform_row_without_target_message_is_empty_not_error() {
        let payload = r#""[{\"msg\":\"Request handler started\"}]""#;
        let output = transform_row(&raw("2024-01-01", payload)).unwrap();

        assert_eq!(output.date, "2024-01-01");
        assert!(output.url.is_none());
        assert!(output.params.is_none());
    }

    #[test]
    fn test_transform_row_empty_array_is_empty_not_error() {
        let output = transform_row(&raw("2024-01-01", r#""[]""#)).unwrap();
        assert!(output.url.is_none());
    }

    #[test]
    fn test_transform_row_invalid_json_fails() {
        let result = transform_row(&raw("2024-01-01", r#""[{\"msg\": oops""#));
        assert!(matches!(result, Err(ExtractError::JsonParse(_))));
    }

    #[test]
    fn test_transform_row_truncated_message_fails_extraction() {
        // Matches both selector markers but the duration marker is missing.
        let payload = r#""[{\"msg\":\"Call to GET /transaction/customers/42/transactions?maxResults=10\"}]""#;
        let result = transform_row(&raw("2024-01-01", payload));
        assert!(matches!(result, Err(ExtractError::UrlExtraction(_))));
    }

    #[test]
    fn test_transform_row_non_numeric_customer_id_fails() {
        let payload = r#""[{\"msg\":\"Call to GET /transaction/customers/abc/transactions?maxResults=10&firstResult=0 took 5ms\"}]""#;
        let result = transform_row(&raw("2024-01-01", payload));
        assert!(matches!(result, Err(ExtractError::ParamParse { name: "customerId", .. })));
    }
}

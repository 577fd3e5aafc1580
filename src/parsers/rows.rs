use std::io::{BufRead, Lines};

use anyhow::Error;

use crate::error::ExtractError;

const INPUT_DELIMITER: char = ';';
// First field of an input header line, when the export carries one.
const HEADER_SENTINEL: &str = "Date";

/// One raw input row before any payload processing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the input file, for error reporting.
    pub line_number: usize,
    pub date: String,
    pub payload: String,
}

/// Lazy reader over semicolon-delimited `(date, payload)` rows.
///
/// Splits each line on the first `;` only, so payloads containing the
/// delimiter stay intact. Empty lines are skipped, as is a leading header
/// line whose first field is exactly `Date`. A non-empty line without any
/// delimiter fails with [`ExtractError::MalformedRow`].
pub struct RowReader<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
    seen_data: bool,
}

impl<R: BufRead> RowReader<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines(), line_number: 0, seen_data: false }
    }
}

impl<R: BufRead> Iterator for RowReader<R> {
    type Item = anyhow::Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::from(e).context("failed to read input line"))),
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            let first = !self.seen_data;
            self.seen_data = true;

            match line.split_once(INPUT_DELIMITER) {
                Some((date, payload)) => {
                    if first && date == HEADER_SENTINEL {
                        continue;
                    }
                    return Some(Ok(RawRow {
                        line_number: self.line_number,
                        date: date.to_string(),
                        payload: payload.to_string(),
                    }));
                }
                None => {
                    return Some(
                        Err(Error::from(ExtractError::MalformedRow(1))
                            .context(format!("line {}", self.line_number))),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn read_all(input: &str) -> Vec<anyhow::Result<RawRow>> {
        RowReader::new(Cursor::new(input.to_string())).collect()
    }

    #[test]
    fn test_reads_rows_in_order_with_line_numbers() {
        let rows = read_all("2024-01-01;payload one\n2024-01-02;payload two\n");

        assert_eq!(rows.len(), 2);
        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.line_number, 1);
        assert_eq!(first.date, "2024-01-01");
        assert_eq!(first.payload, "payload one");
        let second = rows[1].as_ref().unwrap();
        assert_eq!(second.line_number, 2);
        assert_eq!(second.date, "2024-01-02");
    }

    #[test]
    fn test_payload_keeps_delimiters_after_the_first() {
        let rows = read_all("2024-01-01;a;b;c\n");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].as_ref().unwrap().payload, "a;b;c");
    }

    #[test]
    fn test_skips_leading_header_line() {
        let rows = read_all("Date;Url;CustomerId\n2024-01-01;payload\n");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].as_ref().unwrap().date, "2024-01-01");
        assert_eq!(rows[0].as_ref().unwrap().line_number, 2);
    }

    #[test]
    fn test_header_sentinel_only_applies_to_first_row() {
        let rows = read_all("2024-01-01;payload\nDate;not a header here\n");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].as_ref().unwrap().date, "Date");
    }

    #[test]
    fn test_skips_empty_lines() {
        let rows = read_all("\n2024-01-01;payload\n\n\n2024-01-02;payload\n");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_ref().unwrap().line_number, 2);
        assert_eq!(rows[1].as_ref().unwrap().line_number, 5);
    }

    #[test]
    fn test_line_without_delimiter_is_malformed() {
        let rows = read_all("2024-01-01 no delimiter here\n");

        assert_eq!(rows.len(), 1);
        let err = rows[0].as_ref().unwrap_err();
        assert!(err.to_string().contains("line 1"));
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::MalformedRow(1))
        ));
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(read_all("").is_empty());
    }
}

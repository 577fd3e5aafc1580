//! Transaction log report extractor
//!
//! This library reads a semicolon-delimited CSV export in which every row
//! carries a date and an escaped JSON array of log entries, finds the log
//! message describing a `GET /transaction/customers/{id}/transactions?...`
//! request, and writes a new semicolon-delimited report of the request URL
//! and its query parameters, one line per input row in input order.
//!
//! The pipeline per row is: raw row -> normalized JSON text -> parsed log
//! entries -> matched log message -> extracted URL -> parsed query
//! parameters -> formatted report line.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use txn_log_report::process_file;
//!
//! let summary = process_file(Path::new("file.csv"), Path::new("."))?;
//! println!("{} rows written to {}", summary.rows, summary.report_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod extract;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use error::ExtractError;
pub use pipeline::{RunSummary, process_file, transform_row};
pub use report::REPORT_HEADER;

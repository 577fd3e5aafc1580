//! Input-side parsing: CSV rows and the embedded JSON log payload.
//!
//! Each input line carries a date and a log payload: an escaped JSON array
//! wrapped in quotes. [`RowReader`] splits lines lazily; `payload` turns the
//! blob into [`crate::models::LogEntry`] values. Parse failures surface as
//! typed [`crate::error::ExtractError`] values and abort the run; there is no
//! per-row skip policy.

pub mod payload;
pub mod rows;

pub use payload::{normalize_payload, parse_log_entries};
pub use rows::{RawRow, RowReader};

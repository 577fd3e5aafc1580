//! Data models for the extraction pipeline.
//!
//! - [`LogEntry`] - one element of a row's embedded JSON log array
//! - [`RequestParams`] - query parameters parsed from the request URL
//! - [`OutputRow`] - the data behind one formatted report line
//!
//! [`LogEntry`] uses serde for JSON deserialization; the other two are built
//! by hand as rows move through the pipeline and never persist past their row.

pub mod entry;
pub mod params;
pub mod row;

pub use entry::LogEntry;
pub use params::RequestParams;
pub use row::OutputRow;

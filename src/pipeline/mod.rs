//! The per-row transform and the whole-file runner.
//!
//! Strictly sequential: one row is read, fully transformed, and formatted
//! before the next is touched. No state is shared across rows, so output
//! order is input order by construction.

pub mod runner;

pub use runner::{RunSummary, process_file, transform_row};

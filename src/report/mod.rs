//! Output side: fixed-order line formatting and the timestamped report file.

pub mod line;
pub mod writer;

pub use line::{REPORT_HEADER, format_line};
pub use writer::write_report;

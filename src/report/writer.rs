use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::report::line::REPORT_HEADER;

const REPORT_STEM: &str = "file_generated";
// Second-granularity run timestamp; collisions within one second surface as a
// create_new failure rather than an overwrite.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d.%H.%M.%S";

fn report_file_name(created_at: &DateTime<Local>) -> String {
    format!("{REPORT_STEM}_{}.csv", created_at.format(TIMESTAMP_FORMAT))
}

/// Write the fixed header followed by the formatted lines, in order, to a new
/// timestamped file under `output_dir`. Returns the path of the created file.
///
/// The file is opened with `create_new`, so an existing report is never
/// overwritten or appended to.
pub fn write_report(output_dir: &Path, lines: &[String]) -> Result<PathBuf> {
    let path = output_dir.join(report_file_name(&Local::now()));

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .with_context(|| format!("failed to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{REPORT_HEADER}")
        .with_context(|| format!("failed to write to report file: {}", path.display()))?;
    for line in lines {
        writeln!(writer, "{line}")
            .with_context(|| format!("failed to write to report file: {}", path.display()))?;
    }
    writer.flush().context("failed to flush report file")?;

    Ok(path)
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::pipeline::process_file;

#[derive(Parser)]
#[command(name = "txn-log-report")]
#[command(version = "0.1.0")]
#[command(about = "Extract transaction request URLs from a support log CSV export", long_about = None)]
pub struct Cli {
    /// Semicolon-delimited input file (date;log payload per row)
    pub input: PathBuf,

    /// Directory the timestamped report file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let summary = process_file(&cli.input, &cli.output_dir)?;

    println!("Report written to {}", summary.report_path.display());
    println!("Rows processed: {}", summary.rows);
    if summary.rows_without_target > 0 {
        println!(
            "Rows without a transaction request message: {}",
            summary.rows_without_target
        );
    }

    Ok(())
}

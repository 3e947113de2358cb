//! Output module for presenting parser results
//!
//! This module handles:
//! - The shared `ResultTable` shape
//! - Printing rows to the console, plain or as a boxed table
//! - Saving rows as a timestamped CSV file

mod csv_file;
mod pretty;
mod table;

pub use csv_file::{result_file_name, save_csv, write_row, write_table, DATETIME_FORMAT};
pub use pretty::format_pretty;
pub use table::ResultTable;

use crate::config::OutputConfig;
use clap::ValueEnum;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// How results are presented. No mode means plain printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Boxed table on stdout
    Pretty,
    /// CSV file in the results directory
    File,
}

/// Cells joined by single spaces, one row per line
pub fn format_plain(table: &ResultTable) -> String {
    let mut out = String::new();
    for row in table.all_rows() {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// Sends the table to the selected destination
///
/// # Arguments
///
/// * `table` - The rows to present
/// * `mode` - The output mode, `None` for plain printing
/// * `mode_name` - Name of the parser mode, used in file names
/// * `config` - Output locations
pub fn control_output(
    table: &ResultTable,
    mode: Option<OutputMode>,
    mode_name: &str,
    config: &OutputConfig,
) -> OutputResult<()> {
    match mode {
        Some(OutputMode::Pretty) => print_stdout(&format_pretty(table)),
        Some(OutputMode::File) => {
            let path = save_csv(table, &config.results_path(), mode_name)?;
            tracing::info!("Results saved to: {}", path.display());
            Ok(())
        }
        None => print_stdout(&format_plain(table)),
    }
}

fn print_stdout(text: &str) -> OutputResult<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(text.as_bytes())?;
    handle.flush()?;
    Ok(())
}

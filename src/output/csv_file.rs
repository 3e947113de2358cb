//! CSV result files

use crate::output::table::ResultTable;
use crate::output::OutputResult;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Timestamp part of result file names
pub const DATETIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

const SEPARATOR: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEPARATOR) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Writes one CSV row terminated by `\n`
pub fn write_row<W: Write>(w: &mut W, row: &[String]) -> std::io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", SEPARATOR)?;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    w.write_all(b"\n")
}

/// Writes the header and all rows
pub fn write_table<W: Write>(w: &mut W, table: &ResultTable) -> std::io::Result<()> {
    for row in table.all_rows() {
        write_row(w, row)?;
    }
    Ok(())
}

/// `{mode}_{timestamp}.csv`
pub fn result_file_name(mode_name: &str, now: DateTime<Local>) -> String {
    format!("{}_{}.csv", mode_name, now.format(DATETIME_FORMAT))
}

/// Saves the table under `results_dir`, creating it if needed, and returns the file path
pub fn save_csv(table: &ResultTable, results_dir: &Path, mode_name: &str) -> OutputResult<PathBuf> {
    fs::create_dir_all(results_dir)?;
    let path = results_dir.join(result_file_name(mode_name, Local::now()));

    let mut writer = BufWriter::new(File::create(&path)?);
    write_table(&mut writer, table)?;
    writer.flush()?;

    Ok(path)
}

//! Boxed console table

use crate::output::table::ResultTable;

/// Formats a table with `+---+` borders and left-aligned cells
///
/// ```
/// use pydocs_scraper::output::{format_pretty, ResultTable};
///
/// let mut table = ResultTable::with_header(["Status", "Count"]);
/// table.push_row(["Final", "2"]);
/// assert!(format_pretty(&table).contains("| Final  | 2     |"));
/// ```
pub fn format_pretty(table: &ResultTable) -> String {
    let columns = table.column_count();
    let mut widths = vec![0usize; columns];
    for row in table.all_rows() {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    push_row(&mut out, table.header(), &widths);
    out.push_str(&border);
    out.push('\n');
    for row in table.rows() {
        push_row(&mut out, row, &widths);
    }
    if !table.is_empty() {
        out.push_str(&border);
        out.push('\n');
    }
    out
}

fn push_row(out: &mut String, row: &[String], widths: &[usize]) {
    out.push('|');
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        let pad = width - cell.chars().count();
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(pad + 1));
        out.push('|');
    }
    out.push('\n');
}

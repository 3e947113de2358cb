//! Status reconciliation for the PEP index
//!
//! Each index row carries a one-letter preview code; each PEP page carries
//! the full status. The reconciler checks the two against the expected-status
//! table, counts every detail status it sees and keeps the disagreements for
//! a single report at the end of the run.

use crate::output::ResultTable;
use crate::status::ExpectedStatusTable;
use url::Url;

/// Header of the PEP result table
pub const STATUS_HEADER: [&str; 2] = ["Status", "Count"];

/// Label of the trailing sum row
pub const TOTAL_LABEL: &str = "Total";

/// A PEP whose page status is not acceptable for its index code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMismatch {
    /// The PEP page
    pub link: Url,

    /// Code shown on the index (possibly empty)
    pub preview_code: String,

    /// Status found on the PEP page
    pub detail_status: String,

    /// Statuses the code allows
    pub expected: Vec<String>,
}

impl StatusMismatch {
    /// Human-readable diagnostic for the warning log
    pub fn diagnostic(&self) -> String {
        format!(
            "Mismatched status: {}\nPreview code: '{}'\nStatus on page: {}\nExpected statuses: {:?}",
            self.link, self.preview_code, self.detail_status, self.expected
        )
    }
}

/// Result of checking one index row against its PEP page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Page status is one of the expected statuses
    Matched,

    /// Page status disagrees with the preview code
    Mismatched(StatusMismatch),

    /// Preview code is not in the table; no check was made
    UnrecognizedCode(String),
}

/// Classifies a single row without recording anything
pub fn classify(
    table: &ExpectedStatusTable,
    link: &Url,
    preview_code: &str,
    detail_status: &str,
) -> RowOutcome {
    match table.expected_for(preview_code) {
        None => RowOutcome::UnrecognizedCode(preview_code.to_string()),
        Some(expected) if expected.iter().any(|s| s == detail_status) => RowOutcome::Matched,
        Some(expected) => RowOutcome::Mismatched(StatusMismatch {
            link: link.clone(),
            preview_code: preview_code.to_string(),
            detail_status: detail_status.to_string(),
            expected: expected.to_vec(),
        }),
    }
}

/// Accumulates outcomes over one run of the PEP routine
#[derive(Debug)]
pub struct StatusReconciler<'t> {
    table: &'t ExpectedStatusTable,
    histogram: Vec<(String, u64)>,
    mismatches: Vec<StatusMismatch>,
    unrecognized: u64,
    skipped: u64,
}

impl<'t> StatusReconciler<'t> {
    pub fn new(table: &'t ExpectedStatusTable) -> Self {
        Self {
            table,
            histogram: Vec::new(),
            mismatches: Vec::new(),
            unrecognized: 0,
            skipped: 0,
        }
    }

    /// Records a row whose PEP page was fetched and read
    ///
    /// The detail status is counted whatever the outcome.
    pub fn record(&mut self, link: &Url, preview_code: &str, detail_status: &str) -> RowOutcome {
        let outcome = classify(self.table, link, preview_code, detail_status);

        match &outcome {
            RowOutcome::Matched => {}
            RowOutcome::Mismatched(mismatch) => {
                tracing::debug!("Status mismatch for {}", link);
                self.mismatches.push(mismatch.clone());
            }
            RowOutcome::UnrecognizedCode(code) => {
                tracing::error!("Unexpected preview status code '{}' for {}", code, link);
                self.unrecognized += 1;
            }
        }

        self.count(detail_status);
        outcome
    }

    /// Notes a row whose PEP page could not be fetched. It is not counted.
    pub fn skip(&mut self, link: &Url) {
        tracing::debug!("Skipping {} (page unavailable)", link);
        self.skipped += 1;
    }

    fn count(&mut self, detail_status: &str) {
        match self
            .histogram
            .iter_mut()
            .find(|(status, _)| status == detail_status)
        {
            Some((_, count)) => *count += 1,
            None => self.histogram.push((detail_status.to_string(), 1)),
        }
    }

    pub fn finish(self) -> StatusReport {
        StatusReport {
            histogram: self.histogram,
            mismatches: self.mismatches,
            unrecognized: self.unrecognized,
            skipped: self.skipped,
        }
    }
}

/// Final state of a reconciliation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Detail status counts in first-seen order
    pub histogram: Vec<(String, u64)>,

    pub mismatches: Vec<StatusMismatch>,

    /// Rows whose preview code was not in the table
    pub unrecognized: u64,

    /// Rows dropped because their page could not be fetched
    pub skipped: u64,
}

impl StatusReport {
    /// Sum of all histogram counts
    pub fn total(&self) -> u64 {
        self.histogram.iter().map(|(_, count)| count).sum()
    }

    /// Count for one status, zero if never seen
    pub fn count_of(&self, status: &str) -> u64 {
        self.histogram
            .iter()
            .find(|(s, _)| s == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// All mismatch diagnostics joined into one block
    pub fn mismatch_report(&self) -> Option<String> {
        if self.mismatches.is_empty() {
            return None;
        }

        Some(
            self.mismatches
                .iter()
                .map(StatusMismatch::diagnostic)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// Emits the mismatch block as one warning, plus a summary line
    pub fn log(&self) {
        if let Some(report) = self.mismatch_report() {
            tracing::warn!("{}", report);
        }

        tracing::info!(
            "Counted {} PEPs: {} mismatched, {} with unknown codes, {} skipped",
            self.total(),
            self.mismatches.len(),
            self.unrecognized,
            self.skipped
        );
    }

    /// Header, one row per status, then the total
    pub fn to_table(&self) -> ResultTable {
        let mut table = ResultTable::with_header(STATUS_HEADER);
        for (status, count) in &self.histogram {
            table.push_row([status.clone(), count.to_string()]);
        }
        table.push_row([TOTAL_LABEL.to_string(), self.total().to_string()]);
        table
    }
}

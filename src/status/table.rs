//! Expected-status table
//!
//! Maps the one-letter status code shown on the PEP index to the full status
//! strings a PEP page may carry while still agreeing with that code.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Read-only mapping from preview code to acceptable detail statuses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ExpectedStatusTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl Default for ExpectedStatusTable {
    fn default() -> Self {
        Self::from_entries([
            ("A", &["Active", "Accepted"][..]),
            ("D", &["Deferred"][..]),
            ("F", &["Final"][..]),
            ("P", &["Provisional"][..]),
            ("R", &["Rejected"][..]),
            ("S", &["Superseded"][..]),
            ("W", &["Withdrawn"][..]),
            ("", &["Draft", "Active"][..]),
        ])
    }
}

impl ExpectedStatusTable {
    /// Builds a table from `(code, statuses)` pairs
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let entries = entries
            .into_iter()
            .map(|(code, statuses)| {
                (
                    code.to_string(),
                    statuses.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Returns the acceptable statuses for `code`, or `None` if the code is unknown
    pub fn expected_for(&self, code: &str) -> Option<&[String]> {
        self.entries.get(code).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(code, statuses)| (code.as_str(), statuses.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

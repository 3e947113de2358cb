//! PEP status checking
//!
//! This module holds the expected-status table and the reconciler that
//! compares index codes with PEP page statuses.

mod reconcile;
mod table;

pub use reconcile::{
    classify, RowOutcome, StatusMismatch, StatusReconciler, StatusReport, STATUS_HEADER,
    TOTAL_LABEL,
};
pub use table::ExpectedStatusTable;

use std::collections::BTreeMap;

use crate::models::{DropReason, RowError};

/// Row counts observed while cleaning one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleaningReport {
    /// Data rows seen, excluding the header.
    pub rows_read: usize,
    pub rows_retained: usize,
    pub drops_by_reason: BTreeMap<DropReason, usize>
}

impl CleaningReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_read - self.rows_retained
    }

    pub(crate) fn record_drop(&mut self, error: &RowError) {
        *self.drops_by_reason.entry(error.reason()).or_default() += 1;
    }
}

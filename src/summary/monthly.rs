use std::collections::BTreeMap;

use tracing::debug;

use crate::models::CleanedDataset;
use crate::summary::{AggregationError, LedgerTotals};
use crate::types::YearMonth;

/// Totals per calendar month, iterated in chronological order.
///
/// Only months that have at least one transaction are present.
pub type MonthlySummary = BTreeMap<YearMonth, LedgerTotals>;

/// # Errors
/// Returns `AggregationError::Overflow` naming the month whose sums exceed the decimal range.
pub fn summarize_monthly(dataset: &CleanedDataset) -> Result<MonthlySummary, AggregationError> {
    let mut months = MonthlySummary::new();

    for transaction in dataset {
        let month = transaction.month();
        let totals = months.entry(month).or_default();

        *totals = totals.checked_add(transaction.amount)
            .ok_or_else(|| AggregationError::overflow(month))?;
    }

    debug!("Monthly summary computed for {} months", months.len());

    Ok(months)
}

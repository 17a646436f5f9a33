use rust_decimal::Decimal;
use tracing::debug;

use crate::models::CleanedDataset;
use crate::summary::{AggregationError, LedgerTotals};

/// Whole-ledger metrics.
///
/// Mean, maximum and minimum are `None` for an empty ledger so "no data" is never
/// confused with a genuine zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverallSummary {
    pub total_transactions: usize,
    pub total_credit: Decimal,
    pub total_debit: Decimal,
    pub net_amount: Decimal,
    pub avg_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub min_amount: Option<Decimal>
}

impl OverallSummary {
    pub fn is_empty(&self) -> bool {
        self.total_transactions == 0
    }
}

/// # Errors
/// Returns `AggregationError::Overflow` if a ledger-wide sum exceeds the decimal range.
pub fn summarize_overall(dataset: &CleanedDataset) -> Result<OverallSummary, AggregationError> {
    let mut totals = LedgerTotals::default();

    for transaction in dataset {
        totals = totals.checked_add(transaction.amount)
            .ok_or_else(|| AggregationError::overflow("overall"))?;
    }

    let max_amount = dataset.iter().map(|transaction| transaction.amount).max();
    let min_amount = dataset.iter().map(|transaction| transaction.amount).min();

    let avg_amount = match totals.transaction_count {
        0 => None,
        count => Some(totals.net_amount / Decimal::from(count))
    };

    debug!("Overall summary computed over {} transactions", totals.transaction_count);

    Ok(OverallSummary {
        total_transactions: totals.transaction_count,
        total_credit: totals.total_credit,
        total_debit: totals.total_debit,
        net_amount: totals.net_amount,
        avg_amount,
        max_amount,
        min_amount
    })
}

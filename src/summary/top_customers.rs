use rust_decimal::Decimal;

use crate::summary::{CustomerSummary, SelectionError};
use crate::types::CustomerId;

pub const DEFAULT_TOP_N: i64 = 10;

/// One row of the top customers table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCustomer {
    pub customer_id: CustomerId,
    pub total_spent: Decimal,
    pub transaction_count: usize,
    pub avg_amount: Decimal
}

/// Ranks customers by `total_spent`, highest first, and keeps the first `limit`.
///
/// Customers with equal `total_spent` are ordered by ascending customer id, so
/// the result for `limit` is always a prefix of the result for `limit + 1`.
///
/// # Errors
/// Returns `SelectionError::NonPositiveLimit` when `limit` is zero or negative.
pub fn select_top_customers(customers: &CustomerSummary, limit: i64) -> Result<Vec<TopCustomer>, SelectionError> {
    if limit <= 0 {
        return Err(SelectionError::NonPositiveLimit(limit));
    }

    let mut ranked: Vec<TopCustomer> = customers.iter()
        .map(|(customer_id, totals)| TopCustomer {
            customer_id: customer_id.clone(),
            total_spent: totals.total_spent,
            transaction_count: totals.transaction_count,
            avg_amount: totals.avg_amount
        })
        .collect();

    ranked.sort_by(|left, right| {
        right.total_spent.cmp(&left.total_spent)
            .then_with(|| left.customer_id.cmp(&right.customer_id))
    });

    ranked.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

    Ok(ranked)
}

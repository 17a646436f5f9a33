use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::CleanedDataset;
use crate::summary::AggregationError;
use crate::types::CustomerId;

/// Activity of a single customer. `total_spent` is sign-inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerTotals {
    pub total_spent: Decimal,
    pub transaction_count: usize,
    pub avg_amount: Decimal
}

/// Totals per customer, iterated in ascending customer id order.
pub type CustomerSummary = BTreeMap<CustomerId, CustomerTotals>;

/// Groups the ledger by exact customer id.
///
/// Transactions without a customer id are left out, so the summed `total_spent`
/// only matches the overall net amount when every row names a customer.
///
/// # Errors
/// Returns `AggregationError::Overflow` naming the customer whose total exceeds the decimal range.
pub fn summarize_customers(dataset: &CleanedDataset) -> Result<CustomerSummary, AggregationError> {
    let mut running = BTreeMap::<&str, (Decimal, usize)>::new();

    for transaction in dataset {
        let Some(customer_id) = transaction.customer_id.as_deref() else {
            continue;
        };

        let (total, count) = running.entry(customer_id).or_default();
        *total = total.checked_add(transaction.amount)
            .ok_or_else(|| AggregationError::overflow(customer_id))?;
        *count += 1;
    }

    debug!("Customer summary computed for {} customers", running.len());

    let customers = running.into_iter()
        .map(|(customer_id, (total_spent, transaction_count))| {
            let totals = CustomerTotals {
                total_spent,
                transaction_count,
                avg_amount: total_spent / Decimal::from(transaction_count)
            };

            (customer_id.to_string(), totals)
        })
        .collect();

    Ok(customers)
}

use rust_decimal::Decimal;

/// Signed totals for one scope (the whole ledger or a single month).
///
/// Zero amounts are counted and included in `net_amount` but are neither credit nor debit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerTotals {
    /// Sum of the strictly positive amounts.
    pub total_credit: Decimal,
    /// Sum of the strictly negative amounts, kept negative.
    pub total_debit: Decimal,
    pub transaction_count: usize,
    pub net_amount: Decimal
}

impl LedgerTotals {
    /// Returns the totals with `amount` folded in, or `None` if any sum would overflow.
    pub fn checked_add(self, amount: Decimal) -> Option<Self> {
        let mut totals = self;

        if amount > Decimal::ZERO {
            totals.total_credit = totals.total_credit.checked_add(amount)?;
        } else if amount < Decimal::ZERO {
            totals.total_debit = totals.total_debit.checked_add(amount)?;
        }

        totals.net_amount = totals.net_amount.checked_add(amount)?;
        totals.transaction_count += 1;

        Some(totals)
    }
}

use crate::models::Transaction;
use std::slice::Iter;

/// The validated records of one source, in source order.
///
/// Every record here has a date, an amount and a type. Order carries no meaning
/// for aggregation but is kept so diagnostics line up with the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedDataset {
    transactions: Vec<Transaction>
}

impl CleanedDataset {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn iter(&self) -> Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl FromIterator<Transaction> for CleanedDataset {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CleanedDataset {
    type Item = &'a Transaction;
    type IntoIter = Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

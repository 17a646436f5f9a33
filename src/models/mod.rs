mod dataset;
mod errors;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};

pub use dataset::CleanedDataset;
pub use errors::RowError;
pub use transaction::{RawTransaction, Transaction};

/// The validation rule a dropped row failed, used to tally drops.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DropReason {
    Date,
    Amount,
    Type,
    Malformed
}

impl Display for DropReason {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            DropReason::Date => "date",
            DropReason::Amount => "amount",
            DropReason::Type => "type",
            DropReason::Malformed => "malformed"
        };

        formatter.write_str(label)
    }
}

use crate::models::DropReason;
use thiserror::Error;

/// Why a single source row was rejected during cleaning.
///
/// Every variant carries the 1-based line number of the row in the source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("Row [{line}] is missing a date")]
    MissingDate {
        line: u64
    },
    #[error("Row [{line}] has an unparsable date [{value}]")]
    InvalidDate {
        line: u64,
        value: String
    },
    #[error("Row [{line}] is missing an amount")]
    MissingAmount {
        line: u64
    },
    #[error("Row [{line}] has a non-numeric amount [{value}]")]
    InvalidAmount {
        line: u64,
        value: String
    },
    #[error("Row [{line}] is missing a transaction type")]
    MissingType {
        line: u64
    },
    #[error("Row [{line}] could not be decoded: {reason}")]
    Malformed {
        line: u64,
        reason: String
    }
}

impl RowError {
    pub fn line(&self) -> u64 {
        match self {
            Self::MissingDate { line }
            | Self::InvalidDate { line, .. }
            | Self::MissingAmount { line }
            | Self::InvalidAmount { line, .. }
            | Self::MissingType { line }
            | Self::Malformed { line, .. } => *line
        }
    }

    pub fn reason(&self) -> DropReason {
        match self {
            Self::MissingDate { .. } | Self::InvalidDate { .. } => DropReason::Date,
            Self::MissingAmount { .. } | Self::InvalidAmount { .. } => DropReason::Amount,
            Self::MissingType { .. } => DropReason::Type,
            Self::Malformed { .. } => DropReason::Malformed
        }
    }
}

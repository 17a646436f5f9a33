use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Top customers limit must be positive, got [{0}]")]
    NonPositiveLimit(i64)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Numeric overflow while summing amounts for [{scope}]")]
    Overflow {
        scope: String
    }
}

impl AggregationError {
    pub fn overflow(scope: impl Display) -> Self {
        Self::Overflow { scope: scope.to_string() }
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::models::RowError;
use crate::types::{CustomerId, YearMonth};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATE_TIME_FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const NULL_TYPES: [&str; 3] = ["nan", "null", "none"];

/// Represents a single row from the input CSV file.
///
/// Every field is optional here; empty cells deserialize to `None`. Columns
/// beyond the four below are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTransaction {
    pub date: Option<String>,
    pub amount: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub customer_id: Option<String>
}

impl RawTransaction {
    /// Normalizes the row into a [`Transaction`] or reports the first rule it breaks.
    ///
    /// Rules are checked in the order date, amount, type, so a row failing several
    /// of them is still reported (and counted) once.
    pub fn validate(self, line: u64) -> Result<Transaction, RowError> {
        let date = match self.date.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => parse_date(value).ok_or_else(|| RowError::InvalidDate { line, value: value.to_string() })?,
            None => return Err(RowError::MissingDate { line })
        };

        let amount = match self.amount.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => parse_amount(value).ok_or_else(|| RowError::InvalidAmount { line, value: value.to_string() })?,
            None => return Err(RowError::MissingAmount { line })
        };

        let Some(transaction_type) = self.transaction_type.as_deref().and_then(normalize_type) else {
            return Err(RowError::MissingType { line })
        };

        let customer_id = self.customer_id.filter(|value| !value.trim().is_empty());

        Ok(Transaction {
            date,
            amount,
            transaction_type,
            customer_id
        })
    }
}

/// A validated ledger record.
///
/// A positive `amount` is a credit, a negative one a debit. Rows without a
/// customer still count towards overall and monthly totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Decimal,
    /// Trimmed and lowercased.
    pub transaction_type: String,
    pub customer_id: Option<CustomerId>
}

impl Transaction {
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }
}

/// Parses the date part of a date or timestamp; any time of day is discarded.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }

    DATE_FORMATS.iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS.iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|timestamp| timestamp.date())
        })
}

pub(crate) fn parse_amount(value: &str) -> Option<Decimal> {
    Decimal::from_str(value).ok()
        .or_else(|| Decimal::from_scientific(value).ok())
}

pub(crate) fn normalize_type(value: &str) -> Option<String> {
    let normalized = value.trim().to_lowercase();

    if normalized.is_empty() || NULL_TYPES.contains(&normalized.as_str()) {
        return None;
    }

    Some(normalized)
}

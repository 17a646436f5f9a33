mod year_month;

pub use year_month::YearMonth;

/// Customer identifiers are opaque and compared verbatim.
pub type CustomerId = String;

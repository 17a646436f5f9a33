mod customer;
mod errors;
mod monthly;
mod overall;
mod top_customers;
mod totals;

pub use customer::{summarize_customers, CustomerSummary};
pub use errors::{AggregationError, SelectionError};
pub use monthly::{summarize_monthly, MonthlySummary};
pub use overall::{summarize_overall, OverallSummary};
pub use top_customers::{select_top_customers, TopCustomer, DEFAULT_TOP_N};
pub use totals::LedgerTotals;

use std::io::Write;

use anyhow::Result;
use csv::Writer;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::engine::PipelineReport;

const MONEY_DECIMAL_PLACES: u32 = 2;
const NO_VALUE: &str = "n/a";

/// Renders every table of a run as headed, comma separated sections.
///
/// Amounts are rounded to two decimal places, halves away from zero; undefined
/// values print as `n/a`. Months are listed chronologically, the customer table
/// by ascending customer id and the top customers by rank.
pub fn write_report<W: Write>(output: &mut W, report: &PipelineReport) -> Result<()> {
    writeln!(output, "[cleaning]")?;
    write_table(output, &["rows_before", "rows_after", "rows_dropped"], [vec![
        report.cleaning.rows_read.to_string(),
        report.cleaning.rows_retained.to_string(),
        report.cleaning.rows_dropped().to_string()
    ]])?;

    let overall = &report.overall;

    writeln!(output, "\n[overall]")?;
    write_table(
        output,
        &["total_transactions", "total_credit", "total_debit", "net_amount", "avg_amount", "max_amount", "min_amount"],
        [vec![
            overall.total_transactions.to_string(),
            money(overall.total_credit),
            money(overall.total_debit),
            money(overall.net_amount),
            optional_money(overall.avg_amount),
            optional_money(overall.max_amount),
            optional_money(overall.min_amount)
        ]]
    )?;

    writeln!(output, "\n[monthly]")?;
    write_table(
        output,
        &["year_month", "total_credit", "total_debit", "transaction_count", "net_amount"],
        report.monthly.iter().map(|(month, totals)| vec![
            month.to_string(),
            money(totals.total_credit),
            money(totals.total_debit),
            totals.transaction_count.to_string(),
            money(totals.net_amount)
        ])
    )?;

    writeln!(output, "\n[customers]")?;
    write_table(
        output,
        &["customer_id", "total_spent", "transaction_count", "avg_amount"],
        report.customers.iter().map(|(customer_id, totals)| vec![
            customer_id.clone(),
            money(totals.total_spent),
            totals.transaction_count.to_string(),
            money(totals.avg_amount)
        ])
    )?;

    writeln!(output, "\n[top_customers]")?;
    write_table(
        output,
        &["rank", "customer_id", "total_spent", "transaction_count", "avg_amount"],
        report.top_customers.iter().enumerate().map(|(index, customer)| vec![
            (index + 1).to_string(),
            customer.customer_id.clone(),
            money(customer.total_spent),
            customer.transaction_count.to_string(),
            money(customer.avg_amount)
        ])
    )?;

    output.flush()?;

    Ok(())
}

fn write_table<W, R>(output: &mut W, header: &[&str], rows: R) -> Result<()>
where
    W: Write,
    R: IntoIterator<Item = Vec<String>>
{
    let mut table = Writer::from_writer(output);

    table.write_record(header)?;

    for row in rows {
        table.write_record(&row)?;
    }

    table.flush()?;

    Ok(())
}

fn money(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded.to_string()
}

fn optional_money(value: Option<Decimal>) -> String {
    value.map(money).unwrap_or_else(|| NO_VALUE.to_string())
}

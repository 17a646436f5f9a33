use super::{Pipeline, PipelineConfig};

use anyhow::Result;
use rust_decimal::Decimal;
use std::io::Write;

use tempfile::NamedTempFile;

use crate::loader::{CleaningReport, SourceError};
use crate::models::CleanedDataset;
use crate::summary::{AggregationError, SelectionError, DEFAULT_TOP_N};

fn create_temporary_csv(rows: &[(&str, &str, &str, &str)]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "date,amount,type,customer_id")?;

    for (date, amount, kind, customer) in rows {
        writeln!(file, "{},{},{},{}", date, amount, kind, customer)?;
    }

    Ok(file)
}

#[test]
fn test_config_defaults_and_overrides() {
    let config = PipelineConfig::new("ledger.csv");

    assert_eq!(config.top_n(), DEFAULT_TOP_N);
    assert_eq!(config.source().to_str(), Some("ledger.csv"));
    assert_eq!(config.with_top_n(3).top_n(), 3);
}

#[tokio::test]
async fn test_pipeline_produces_every_summary() -> Result<()> {
    let file = create_temporary_csv(&[
        ("2024-01-05", "100", "credit", "A"),
        ("2024-01-20", "-40", "debit", "A"),
        ("2024-02-01", "50", "Credit", "B"),
        ("2024-02-02", "", "credit", "B")
    ])?;

    let pipeline = Pipeline::new(PipelineConfig::new(file.path()).with_top_n(1));
    let report = pipeline.run().await?;

    assert_eq!(report.cleaning.rows_read, 4);
    assert_eq!(report.cleaning.rows_retained, 3);

    assert_eq!(report.overall.total_transactions, 3);
    assert_eq!(report.overall.total_credit, Decimal::from(150));
    assert_eq!(report.overall.total_debit, Decimal::from(-40));
    assert_eq!(report.overall.net_amount, Decimal::from(110));

    let months: Vec<(String, Decimal)> = report.monthly.iter()
        .map(|(month, totals)| (month.to_string(), totals.net_amount))
        .collect();
    assert_eq!(months, vec![("2024-01".to_string(), Decimal::from(60)), ("2024-02".to_string(), Decimal::from(50))]);
    assert_eq!(report.monthly.len(), 2);
    assert_eq!(report.customers.len(), 2);

    assert_eq!(report.top_customers.len(), 1);
    assert_eq!(report.top_customers[0].customer_id, "A");
    assert_eq!(report.top_customers[0].total_spent, Decimal::from(60));

    Ok(())
}

#[tokio::test]
async fn test_pipeline_runs_are_reproducible() -> Result<()> {
    let file = create_temporary_csv(&[
        ("2024-01-05", "10.10", "credit", "A"),
        ("2024-03-20", "-3.33", "debit", "B"),
        ("2024-03-21", "7.77", "credit", "C"),
        ("2024-04-01", "7.77", "credit", "D")
    ])?;

    let pipeline = Pipeline::new(PipelineConfig::new(file.path()));

    assert_eq!(pipeline.run().await?, pipeline.run().await?);

    Ok(())
}

#[tokio::test]
async fn test_pipeline_fails_on_missing_source() {
    let pipeline = Pipeline::new(PipelineConfig::new("missing_transactions.csv"));
    let error = pipeline.run().await.expect_err("missing source must fail");

    assert!(matches!(error.downcast_ref::<SourceError>(), Some(SourceError::Open { .. })));
}

#[tokio::test]
async fn test_pipeline_fails_on_missing_columns() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "date,amount,customer_id")?;
    writeln!(file, "2024-01-05,100,A")?;

    let error = Pipeline::new(PipelineConfig::new(file.path())).run().await.expect_err("missing column must fail");

    assert!(matches!(error.downcast_ref::<SourceError>(), Some(SourceError::MissingColumns(columns)) if columns == &vec!["type".to_string()]));

    Ok(())
}

#[tokio::test]
async fn test_pipeline_rejects_non_positive_top_n() -> Result<()> {
    let file = create_temporary_csv(&[("2024-01-05", "100", "credit", "A")])?;

    let error = Pipeline::new(PipelineConfig::new(file.path()).with_top_n(0)).run().await.expect_err("zero limit must fail");

    assert_eq!(error.downcast_ref::<SelectionError>(), Some(&SelectionError::NonPositiveLimit(0)));

    Ok(())
}

#[tokio::test]
async fn test_pipeline_summarizes_empty_dataset_as_no_data() -> Result<()> {
    let pipeline = Pipeline::new(PipelineConfig::new("unused.csv"));
    let report = pipeline.summarize(CleanedDataset::default(), CleaningReport::default()).await?;

    assert!(report.overall.is_empty());
    assert_eq!(report.overall.avg_amount, None);
    assert!(report.monthly.is_empty());
    assert!(report.customers.is_empty());
    assert!(report.top_customers.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_pipeline_fails_with_cause_when_sums_overflow() -> Result<()> {
    let file = create_temporary_csv(&[
        ("2024-01-05", "50000000000000000000000000000", "credit", "A"),
        ("2024-01-06", "50000000000000000000000000000", "credit", "A")
    ])?;

    let error = Pipeline::new(PipelineConfig::new(file.path())).run().await.expect_err("overflowing sums must fail");

    assert!(matches!(error.downcast_ref::<AggregationError>(), Some(AggregationError::Overflow { .. })));
    assert!(error.to_string().contains("Numeric overflow"));

    Ok(())
}

use crate::loader::{CleaningReport, SourceError};
use crate::models::{CleanedDataset, RawTransaction, RowError, Transaction};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Columns every source must carry. Any others are ignored.
const REQUIRED_COLUMNS: [&str; 4] = ["date", "amount", "type", "customer_id"];

/// Opens the CSV file at `path` and cleans it.
///
/// # Errors
/// Returns `SourceError` if the file cannot be opened, lacks a required column,
/// or fails with an I/O error part way through. Invalid rows are not errors;
/// they are dropped and tallied in the returned [`CleaningReport`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<(CleanedDataset, CleaningReport), SourceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source
    })?;

    info!("Loading transactions from: {}", path.display());

    load_from_reader(BufReader::new(file))
}

/// Cleans CSV data from any reader. See [`load_from_path`].
pub fn load_from_reader<R: Read>(source: R) -> Result<(CleanedDataset, CleaningReport), SourceError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    check_required_columns(&headers)?;

    let mut report = CleaningReport::default();
    let mut transactions = Vec::new();

    for result in reader.records() {
        let row = match result {
            Ok(record) => decode(&record, &headers),
            Err(error) if error.is_io_error() => return Err(SourceError::Read(error)),
            Err(error) => Err(RowError::Malformed {
                line: error.position().map(|position| position.line()).unwrap_or_default(),
                reason: error.to_string()
            })
        };

        report.rows_read += 1;

        match row {
            Ok(transaction) => transactions.push(transaction),
            Err(error) => {
                debug!(line = error.line(), reason = %error.reason(), "Dropping row: {error}");
                report.record_drop(&error);
            }
        }
    }

    report.rows_retained = transactions.len();

    info!("Rows before cleaning: {}", report.rows_read);
    info!("Rows after cleaning : {}", report.rows_retained);

    if report.rows_dropped() > 0 {
        warn!("Dropped {} invalid rows {:?}", report.rows_dropped(), report.drops_by_reason);
    }

    let dataset = CleanedDataset::new(transactions);

    if dataset.is_empty() && report.rows_read > 0 {
        warn!("Every row of the source was dropped during cleaning");
    }

    Ok((dataset, report))
}

fn check_required_columns(headers: &StringRecord) -> Result<(), SourceError> {
    let missing: Vec<String> = REQUIRED_COLUMNS.iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(SourceError::MissingColumns(missing));
    }

    Ok(())
}

fn decode(record: &StringRecord, headers: &StringRecord) -> Result<Transaction, RowError> {
    let line = record.position().map(|position| position.line()).unwrap_or_default();

    let raw: RawTransaction = record.deserialize(Some(headers)).map_err(|error| RowError::Malformed {
        line,
        reason: error.to_string()
    })?;

    raw.validate(line)
}

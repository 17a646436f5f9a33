use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal problems with the source as a whole. Any of these aborts the run
/// before aggregation starts.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unable to open transactions source [{path}]: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Transactions source is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("Transactions source could not be read: {0}")]
    Read(#[from] csv::Error)
}

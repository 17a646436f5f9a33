mod csv_loader;
mod errors;
mod report;

pub use csv_loader::{load_from_path, load_from_reader};
pub use errors::SourceError;
pub use report::CleaningReport;

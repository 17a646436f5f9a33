mod writer;

pub use writer::write_report;

//! Export of lap tables.

pub mod csv;

pub use csv::{export_csv, export_csv_to_file, ExportError, CSV_HEADER, DEFAULT_CSV_FILENAME};

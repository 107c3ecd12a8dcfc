//! CSV export of logged time entries.

mod csv;

pub use csv::CsvExportService;

//! Batch error types

use thiserror::Error;

/// Errors that stop a batch before or while it runs.
///
/// Per-row problems never show up here; they become verdicts.
#[derive(Debug, Error)]
pub enum BatchError {
    /// File could not be opened or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be parsed as CSV, or CSV output failed
    #[error("could not read file: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook could not be opened or a sheet could not be read
    #[error("could not read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Excel export failed
    #[error("Excel export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Table does not fit on one worksheet
    #[error("table too large for a worksheet: {rows} rows, {columns} columns")]
    SheetLimit { rows: usize, columns: usize },

    /// JSON export failed
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    /// No data rows to classify
    #[error("the input file appears empty")]
    EmptyDataset,

    /// Selected column is not in the header row
    #[error("column '{column}' not found (available: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// Rejected batch configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;

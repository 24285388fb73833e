/// Errors from the benchmark table and chart layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, reshaping or plotting a result file.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The input file could not be opened or read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        /// The input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed CSV (e.g. ragged rows, bad UTF-8).
    #[error("Malformed CSV in '{}': {source}", .path.display())]
    Csv {
        /// The input path.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("Required column '{column}' not found")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// The table has no numeric column left to chart.
    #[error("No numeric metric columns to plot")]
    NoMetrics,

    /// An index cell is not an integer.
    #[error("Invalid index value '{value}' in row {row}")]
    InvalidIndex {
        /// 1-based data row number (header excluded).
        row: usize,
        /// The offending cell text.
        value: String,
    },

    /// Drawing the chart grid failed before anything was written.
    #[error("Failed to render chart: {reason}")]
    Render {
        /// Formatted cause chain from the drawing backend.
        reason: String,
    },

    /// The rendered image could not be written to disk.
    #[error("Failed to write '{}': {reason}", .path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// Formatted cause chain from the drawing backend.
        reason: String,
    },
}

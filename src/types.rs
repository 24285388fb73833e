/// Serializable output types for the table echo.
///
/// The echo always carries the table exactly as read (every column,
/// including both block-size columns), not the reshaped metric view.
use serde::{Deserialize, Serialize};

use crate::bench::BenchTable;

/// One input file's raw table, as written by `--output json|compact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOutput {
    /// The input path as given on the command line.
    pub file: String,
    /// Column headers in file order.
    pub columns: Vec<String>,
    /// Raw cell text, row by row.
    pub rows: Vec<Vec<String>>,
}

impl TableOutput {
    /// Construct from a loaded table.
    #[must_use]
    pub fn new(file: String, table: &BenchTable) -> Self {
        Self {
            file,
            columns: table.headers.clone(),
            rows: table.rows.clone(),
        }
    }
}

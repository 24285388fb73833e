/// CSV loading with a schema check on the block-size columns.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use super::errors::BenchError;

/// Header of the column used as the x-axis of every chart.
pub const INDEX_COLUMN: &str = "block size (log2)";

/// Header of the byte-size column, redundant with [`INDEX_COLUMN`].
pub const BYTES_COLUMN: &str = "block size (b)";

/// A benchmark result table exactly as read: headers plus raw cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchTable {
    /// Column headers in file order.
    pub headers: Vec<String>,
    /// Data rows; each has exactly `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl BenchTable {
    /// Position of a column by exact header name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate the cells of one column in row order.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[idx].as_str())
    }
}

/// Load a result file from disk.
///
/// # Errors
///
/// - `BenchError::Io` — the file cannot be opened
/// - `BenchError::Csv` — the content is not well-formed CSV
/// - `BenchError::MissingColumn` — a required block-size column is absent
pub fn load(path: &Path) -> Result<BenchTable, BenchError> {
    let file = File::open(path).map_err(|source| BenchError::Io {
        path: path.to_owned(),
        source,
    })?;
    from_reader(file).map_err(|err| match err {
        LoadError::Csv(source) => BenchError::Csv {
            path: path.to_owned(),
            source,
        },
        LoadError::Schema(err) => err,
    })
}

/// Internal split so `from_reader` stays path-agnostic.
#[derive(Debug)]
pub enum LoadError {
    Csv(csv::Error),
    Schema(BenchError),
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Parse a result table from any reader.
///
/// Fields are trimmed; rows must all have the header's width.
///
/// # Errors
///
/// Returns `LoadError::Csv` for malformed input and `LoadError::Schema`
/// when a required column is missing.
pub fn from_reader<R: Read>(reader: R) -> Result<BenchTable, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    for required in [INDEX_COLUMN, BYTES_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::Schema(BenchError::MissingColumn {
                column: required.to_owned(),
            }));
        }
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record: StringRecord = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(BenchTable { headers, rows })
}

/// Reshape a `BenchTable` into per-metric series indexed by block size.
use super::errors::BenchError;
use super::table::{BYTES_COLUMN, BenchTable, INDEX_COLUMN};

/// One chartable metric: `(index, value)` pairs in row order.
///
/// A `None` value is a missing cell; the line breaks around it.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    /// Column header, used as the chart title.
    pub name: String,
    /// `(block size (log2), value)` per row.
    pub points: Vec<(i64, Option<f64>)>,
}

impl MetricSeries {
    /// The point with the smallest value.
    ///
    /// Ties resolve to the first occurrence in row order. Returns `None`
    /// when every value is missing.
    #[must_use]
    pub fn minimum(&self) -> Option<(i64, f64)> {
        self.present()
            .fold(None, |best: Option<(i64, f64)>, (x, y)| match best {
                Some((_, min)) if min <= y => best,
                _ => Some((x, y)),
            })
    }

    /// Iterate only the points that carry a value.
    pub fn present(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.points.iter().filter_map(|&(x, y)| y.map(|y| (x, y)))
    }

    /// Runs of consecutive present points, split at every missing value.
    ///
    /// Each run is drawn as its own line, so gaps stay visible.
    #[must_use]
    pub fn segments(&self) -> Vec<Vec<(i64, f64)>> {
        self.points
            .split(|&(_, y)| y.is_none())
            .filter(|run| !run.is_empty())
            .map(|run| run.iter().filter_map(|&(x, y)| y.map(|y| (x, y))).collect())
            .collect()
    }

    /// Inclusive `(min, max)` of present values, or `None` if all are missing.
    #[must_use]
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.present().fold(None, |acc, (_, y)| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}

/// The reshaped table: one series per metric, all sharing the same index.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTable {
    /// Name of the index column (always [`INDEX_COLUMN`]).
    pub index_name: String,
    /// Metric series in file column order.
    pub series: Vec<MetricSeries>,
}

impl MetricTable {
    /// Inclusive `(min, max)` of the index, or `None` for an empty table.
    #[must_use]
    pub fn index_bounds(&self) -> Option<(i64, i64)> {
        self.series
            .first()?
            .points
            .iter()
            .map(|&(x, _)| x)
            .fold(None, |acc, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
    }
}

/// Index the table by [`INDEX_COLUMN`], drop [`BYTES_COLUMN`], and turn every
/// remaining numeric column into a `MetricSeries`.
///
/// Columns with any non-empty, non-numeric cell are label columns and are
/// left out.
///
/// # Errors
///
/// - `BenchError::MissingColumn` — a block-size column is absent
/// - `BenchError::InvalidIndex` — an index cell is not an integer
/// - `BenchError::NoMetrics` — nothing numeric remains to chart
pub fn reshape(table: &BenchTable) -> Result<MetricTable, BenchError> {
    let index_col = required_column(table, INDEX_COLUMN)?;
    let bytes_col = required_column(table, BYTES_COLUMN)?;

    let index: Vec<i64> = table
        .column(index_col)
        .enumerate()
        .map(|(i, cell)| {
            cell.parse::<i64>().map_err(|_| BenchError::InvalidIndex {
                row: i + 1,
                value: cell.to_owned(),
            })
        })
        .collect::<Result<_, _>>()?;

    let series: Vec<MetricSeries> = table
        .headers
        .iter()
        .enumerate()
        .filter(|&(col, _)| col != index_col && col != bytes_col)
        .filter_map(|(col, name)| {
            let values = numeric_column(table, col)?;
            Some(MetricSeries {
                name: name.clone(),
                points: index.iter().copied().zip(values).collect(),
            })
        })
        .collect();

    if series.is_empty() {
        return Err(BenchError::NoMetrics);
    }

    Ok(MetricTable {
        index_name: INDEX_COLUMN.to_owned(),
        series,
    })
}

fn required_column(table: &BenchTable, name: &str) -> Result<usize, BenchError> {
    table
        .column_index(name)
        .ok_or_else(|| BenchError::MissingColumn {
            column: name.to_owned(),
        })
}

/// Parse a column as numbers; `None` if any non-empty cell is not numeric.
///
/// Empty, `NaN` and infinite cells (including overflows such as `1e400`)
/// are missing values.
fn numeric_column(table: &BenchTable, col: usize) -> Option<Vec<Option<f64>>> {
    table
        .column(col)
        .map(|cell| {
            if cell.is_empty() {
                return Some(None);
            }
            let value = cell.parse::<f64>().ok()?;
            Some(value.is_finite().then_some(value))
        })
        .collect()
}

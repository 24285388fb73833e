/// Console output: usage text, per-file diagnostics, table echo, debug timing.
use std::io::{self, Write};
use std::path::Path;

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::bench::{BenchError, BenchTable};
use crate::types::TableOutput;

/// Output context passed to the pipeline.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print stage timings and failure causes to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(format: OutputFormat, no_header: bool, debug: bool) -> Self {
        Self {
            format,
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Print the underlying cause of a reported failure when `--debug` is set.
    pub fn debug_cause(&self, err: &BenchError) {
        if self.debug {
            eprintln!("[debug] {err}");
        }
    }
}

impl Default for OutputCtx {
    fn default() -> Self {
        Self::new(OutputFormat::Table, false, false)
    }
}

// --- Usage and diagnostics ---

/// Write the usage message shown when no file is given.
///
/// # Errors
///
/// Propagates I/O errors from `out`.
pub fn write_usage<W: Write>(out: &mut W, program: &str) -> io::Result<()> {
    writeln!(out, "Invalid arguments")?;
    writeln!(out)?;
    writeln!(out, "Usage: {program} [file1] [file2] ...")
}

/// Report an input file that could not be loaded.
///
/// # Errors
///
/// Propagates I/O errors from `out`.
pub fn write_read_failure<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Could not read {}", path.display())
}

/// Report an output image that could not be written.
///
/// # Errors
///
/// Propagates I/O errors from `out`.
pub fn write_write_failure<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Could not write to {}", path.display())
}

// --- Table echo ---

/// Echo the raw input table.
///
/// # Errors
///
/// Propagates I/O errors from `out`.
pub fn write_table<W: Write>(
    out: &mut W,
    path: &Path,
    table: &BenchTable,
    ctx: &OutputCtx,
) -> io::Result<()> {
    match ctx.format {
        OutputFormat::Table => {
            writeln!(out, "Filename: {}", path.display())?;
            writeln!(out, "{}", render_table(table, ctx))?;
            writeln!(out)
        }
        OutputFormat::Json => {
            let value = TableOutput::new(path.display().to_string(), table);
            write_json(out, &value, true)
        }
        OutputFormat::Compact => {
            let value = TableOutput::new(path.display().to_string(), table);
            write_json(out, &value, false)
        }
    }
}

/// Build the human-readable table with a leading row-number column.
fn render_table(table: &BenchTable, ctx: &OutputCtx) -> Table {
    let mut rendered = Table::new();
    rendered.load_preset(UTF8_BORDERS_ONLY);

    if !ctx.no_header {
        let mut headers: Vec<Cell> = Vec::with_capacity(table.headers.len() + 1);
        headers.push(Cell::new(""));
        headers.extend(table.headers.iter().map(Cell::new));
        rendered.set_header(headers);
    }

    for (i, row) in table.rows.iter().enumerate() {
        let mut cells: Vec<Cell> = Vec::with_capacity(row.len() + 1);
        cells.push(Cell::new(i));
        cells.extend(row.iter().map(Cell::new));
        rendered.add_row(cells);
    }

    rendered
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    pretty: bool,
) -> io::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(s) => writeln!(out, "{s}"),
        Err(e) => {
            eprintln!("JSON serialization error: {e}");
            Ok(())
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

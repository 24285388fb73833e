/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// blockplot — plot block-size benchmark results.
#[derive(Debug, Parser)]
#[command(
    name = "blockplot",
    about = "Plot block-size benchmark CSV results as per-metric line charts",
    version
)]
pub struct Cli {
    /// Benchmark CSV files. Each gets a `.png` of the same name beside it.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Continue with the next file when one cannot be read.
    /// By default the first unreadable file ends the run.
    #[arg(long)]
    pub keep_going: bool,

    /// Format of the echoed table.
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    pub output: OutputFormat,

    /// Omit the table header row (table format only).
    #[arg(long)]
    pub no_header: bool,

    /// Print per-stage timing and failure causes to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Output format variants for the table echo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Aligned table, preceded by `Filename: <path>`.
    #[default]
    Table,
    /// Pretty-printed JSON object per file.
    Json,
    /// Compact single-line JSON object per file.
    Compact,
}

/// Batch driver: runs the per-file pipeline over every file argument.
pub mod plot;

use std::io::{self, Write};
use std::path::PathBuf;

use crate::bench::FigureWriter;
use crate::cli::OutputCtx;

pub use plot::FileOutcome;

/// What to do with the rest of the batch after a file cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFailurePolicy {
    /// Stop at the first unreadable file; later files are not touched.
    #[default]
    AbortBatch,
    /// Report the unreadable file and continue with the next one.
    SkipFile,
}

impl ReadFailurePolicy {
    /// Map the `--keep-going` flag.
    #[must_use]
    pub fn from_keep_going(keep_going: bool) -> Self {
        if keep_going {
            Self::SkipFile
        } else {
            Self::AbortBatch
        }
    }
}

/// Process `files` strictly in order.
///
/// Returns one outcome per file actually attempted; under
/// [`ReadFailurePolicy::AbortBatch`] the list ends at the first read failure.
///
/// # Errors
///
/// Propagates I/O errors from writing to `out`.
pub fn run<W: Write, F: FigureWriter>(
    files: &[PathBuf],
    policy: ReadFailurePolicy,
    ctx: &OutputCtx,
    figures: &mut F,
    out: &mut W,
) -> io::Result<Vec<FileOutcome>> {
    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        let outcome = plot::run(path, ctx, figures, out)?;
        outcomes.push(outcome);
        if outcome == FileOutcome::ReadFailed && policy == ReadFailurePolicy::AbortBatch {
            break;
        }
    }
    Ok(outcomes)
}

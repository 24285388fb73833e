/// Per-file pipeline: load, reshape, render, save, echo.
use std::io::{self, Write};
use std::path::Path;

use crate::bench::{self, FigureWriter, output_path};
use crate::cli::OutputCtx;
use crate::cli::output::{write_read_failure, write_table, write_write_failure};

/// What happened to one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Image written and table echoed.
    Plotted,
    /// Table echoed, but the image could not be rendered or saved.
    WriteFailed,
    /// Nothing rendered or echoed; the file could not be loaded.
    ReadFailed,
}

/// Run the pipeline for one file.
///
/// Failures are reported on `out` as plain messages; only I/O errors on
/// `out` itself are returned.
///
/// # Errors
///
/// Propagates I/O errors from writing to `out`.
pub fn run<W: Write, F: FigureWriter>(
    path: &Path,
    ctx: &OutputCtx,
    figures: &mut F,
    out: &mut W,
) -> io::Result<FileOutcome> {
    let t_load = ctx.timer("load");
    let loaded = bench::load(path).and_then(|table| {
        let metrics = bench::reshape(&table)?;
        Ok((table, metrics))
    });
    drop(t_load);

    let (table, metrics) = match loaded {
        Ok(loaded) => loaded,
        Err(err) => {
            ctx.debug_cause(&err);
            write_read_failure(out, path)?;
            return Ok(FileOutcome::ReadFailed);
        }
    };

    let image = output_path(path);
    let t_render = ctx.timer("render");
    let saved = figures.write_figure(&path.display().to_string(), &metrics, &image);
    drop(t_render);

    // A failed save still echoes the table.
    let outcome = match saved {
        Ok(()) => FileOutcome::Plotted,
        Err(err) => {
            ctx.debug_cause(&err);
            write_write_failure(out, &image)?;
            FileOutcome::WriteFailed
        }
    };

    write_table(out, path, &table, ctx)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::bench::series::MetricTable;
    use crate::bench::{BenchError, PngWriter};

    const RESULTS: &str = "\
filename,block size (log2),block size (b),io time (s),sais time (s),lcp mean
enwik8,10,1024,0.00100,0.00020,3.5
enwik8,11,2048,0.00090,0.00041,4.0
enwik8,12,4096,0.00120,0.00085,4.5
";

    /// Records every figure instead of drawing it; optionally fails the save.
    #[derive(Default)]
    struct RecordingWriter {
        saved: Vec<(String, MetricTable, PathBuf)>,
        fail: bool,
    }

    impl FigureWriter for RecordingWriter {
        fn write_figure(
            &mut self,
            title: &str,
            table: &MetricTable,
            out: &Path,
        ) -> Result<(), BenchError> {
            self.saved.push((title.to_owned(), table.clone(), out.to_owned()));
            if self.fail {
                Err(BenchError::Write {
                    path: out.to_owned(),
                    reason: "read-only".to_owned(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn run_to_string<F: FigureWriter>(path: &Path, figures: &mut F) -> (FileOutcome, String) {
        let mut buf = Vec::new();
        let outcome = run(path, &OutputCtx::default(), figures, &mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_plots_reshaped_table_to_png_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("enwik8.csv");
        std::fs::write(&input, RESULTS).unwrap();

        let mut figures = RecordingWriter::default();
        let (outcome, text) = run_to_string(&input, &mut figures);

        assert_eq!(outcome, FileOutcome::Plotted);
        assert_eq!(figures.saved.len(), 1);
        let (title, metrics, out) = &figures.saved[0];
        assert_eq!(title, &input.display().to_string());
        assert_eq!(out, &dir.path().join("enwik8.png"));
        let names: Vec<&str> = metrics.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["io time (s)", "sais time (s)", "lcp mean"]);
        assert_eq!(metrics.series[0].minimum(), Some((11, 0.0009)));

        assert!(text.starts_with(&format!("Filename: {}\n", input.display())));
        assert!(text.contains("block size (b)"));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_missing_file_reports_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.csv");

        let mut figures = RecordingWriter::default();
        let (outcome, text) = run_to_string(&input, &mut figures);

        assert_eq!(outcome, FileOutcome::ReadFailed);
        assert_eq!(text, format!("Could not read {}\n", input.display()));
        assert!(figures.saved.is_empty());
    }

    #[test]
    fn test_schema_mismatch_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("other.csv");
        std::fs::write(&input, "size,time\n1,2\n").unwrap();

        let (outcome, text) = run_to_string(&input, &mut RecordingWriter::default());
        assert_eq!(outcome, FileOutcome::ReadFailed);
        assert!(text.starts_with("Could not read "));
        assert!(!text.contains("Filename:"));
    }

    #[test]
    fn test_write_failure_still_echoes_table() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("enwik8.csv");
        std::fs::write(&input, RESULTS).unwrap();

        let mut figures = RecordingWriter {
            fail: true,
            ..RecordingWriter::default()
        };
        let (outcome, text) = run_to_string(&input, &mut figures);

        assert_eq!(outcome, FileOutcome::WriteFailed);
        let image = dir.path().join("enwik8.png");
        let expected = format!(
            "Could not write to {}\nFilename: {}\n",
            image.display(),
            input.display()
        );
        assert!(text.starts_with(&expected));
        assert!(text.contains("4096"));
    }

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn assert_png(path: &Path) {
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(&PNG_SIGNATURE), "{} is not a PNG", path.display());
    }

    #[test]
    fn test_png_writer_writes_image_beside_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("enwik8.csv");
        std::fs::write(&input, RESULTS).unwrap();

        let (outcome, text) = run_to_string(&input, &mut PngWriter);

        assert_eq!(outcome, FileOutcome::Plotted);
        assert!(text.starts_with("Filename: "));
        assert_png(&dir.path().join("enwik8.png"));
    }

    #[test]
    fn test_png_writer_even_count_with_gaps_and_infinity() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("gaps.csv");
        std::fs::write(
            &input,
            "block size (log2),block size (b),t,u\n\
             8,256,0.5,1\n\
             9,512,inf,\n\
             10,1024,0.25,3\n",
        )
        .unwrap();

        let (outcome, _) = run_to_string(&input, &mut PngWriter);

        assert_eq!(outcome, FileOutcome::Plotted);
        assert_png(&dir.path().join("gaps.png"));
    }

    #[test]
    fn test_png_writer_unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("enwik8.csv");
        std::fs::write(&input, RESULTS).unwrap();
        // A directory in the image's place cannot be overwritten by a file.
        std::fs::create_dir(dir.path().join("enwik8.png")).unwrap();

        let (outcome, text) = run_to_string(&input, &mut PngWriter);

        assert_eq!(outcome, FileOutcome::WriteFailed);
        assert!(text.starts_with("Could not write to "));
        assert!(text.contains("Filename: "));
    }
}

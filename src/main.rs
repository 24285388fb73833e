#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! blockplot — plot block-size benchmark results as per-metric line charts.

mod bench;
mod cli;
mod commands;
mod types;

use std::io::Write;

use clap::Parser;

use bench::PngWriter;
use cli::{Cli, OutputCtx, write_usage};
use commands::ReadFailurePolicy;

fn main() {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = if cli.files.is_empty() {
        let program = std::env::args().next().unwrap_or_else(|| "blockplot".to_owned());
        write_usage(&mut out, &program)
    } else {
        let ctx = OutputCtx::new(cli.output, cli.no_header, cli.debug);
        let policy = ReadFailurePolicy::from_keep_going(cli.keep_going);
        commands::run(&cli.files, policy, &ctx, &mut PngWriter, &mut out).map(|_| ())
    };

    // Per-file failures are reported inline; the exit status stays 0.
    if let Err(err) = result.and_then(|()| out.flush()) {
        eprintln!("Error: {err}");
    }
}

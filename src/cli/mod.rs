/// CLI layer: argument parsing and console output.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{OutputCtx, write_usage};

/// Benchmark domain layer: table loading, reshaping, grid layout, rendering.
pub mod chart;
pub mod errors;
pub mod grid;
pub mod series;
pub mod table;

pub use chart::{FigureWriter, PngWriter, output_path};
pub use errors::BenchError;
pub use series::reshape;
pub use table::{BenchTable, load};

pub mod config;
pub mod driver;
pub mod error;
pub mod format;
pub mod output;
pub mod rng;
pub mod stats;

pub use config::{Overrides, RunConfig};
pub use driver::Report;
pub use error::{GeneratorError, Result};
pub use output::CsvWriter;
pub use rng::{Generator, SharedGenerator};
pub use stats::{Histogram, Summary};

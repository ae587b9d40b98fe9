//! CovMat Loader
//!
//! Materializes the two source tables (framework goals and programs) into a
//! [`Dataset`](covmat_model::Dataset).
//!
//! Loading is the only asynchronous step of the pipeline. Both tables must
//! load successfully before anything downstream runs; a failure of either
//! one is returned as a [`LoadError`] and no partial dataset is produced.
//!
//! # Example
//!
//! ```rust,ignore
//! use covmat_loader::{DataSource, FileSource};
//!
//! let source = FileSource::new("framework.json", "programs.yaml");
//! let dataset = source.load().await?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod parsers;
mod sample;
mod source;

pub use error::{LoadError, RowError};
pub use parsers::{default_parsers, CsvRows, JsonRows, ParserRegistry, RowParser, YamlRows};
pub use sample::{sample_goals, sample_programs};
pub use source::{DataSource, FileSource, InMemorySource, DEFAULT_MAX_FILE_SIZE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

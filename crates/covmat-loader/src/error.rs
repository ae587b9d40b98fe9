//! Error types for table loading

use covmat_model::ModelError;
use std::path::PathBuf;

/// Errors while loading the source tables
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Table path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// No row parser handles the file extension
    #[error("unsupported table format: {path}")]
    UnsupportedFormat {
        /// Table path
        path: PathBuf,
    },

    /// Table exceeds the size limit
    #[error("{path} is {size} bytes, limit is {max}")]
    TooLarge {
        /// Table path
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        max: u64,
    },

    /// Rows could not be decoded
    #[error("malformed rows in {path}: {source}")]
    Parse {
        /// Table path
        path: PathBuf,
        /// Decoder error
        #[source]
        source: RowError,
    },

    /// Rows decoded but do not form a valid dataset
    #[error("invalid dataset: {0}")]
    Model(#[from] ModelError),
}

impl LoadError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create parse error for path
    pub fn parse_error(path: impl Into<PathBuf>, source: RowError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Row decoding failure, by format
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    /// JSON decoding failed
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML decoding failed
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// CSV records could not be read
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

//! Error types for configuration and rendering

use std::path::PathBuf;

/// Errors loading or validating a [`ChartConfig`](crate::ChartConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML could not be decoded
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values decoded but are unusable
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Errors producing an output document
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// JSON encoding failed
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing into the output buffer failed
    #[error("format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Unknown output format name
    #[error("unknown output format: '{0}'")]
    UnknownFormat(String),
}

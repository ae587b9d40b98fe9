//! Chart configuration
//!
//! Defaults give a 700px wide SVG with a 180px
//! label gutter, 20px goal rows and blue/red coverage fills.

use crate::error::ConfigError;
use covmat_core::{LayoutSpec, DEFAULT_PADDING_INNER};
use covmat_model::CategoryField;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Space around the matrix for axis labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    /// Above the matrix (category labels)
    pub top: f64,
    /// Right of the matrix
    pub right: f64,
    /// Below the matrix
    pub bottom: f64,
    /// Left of the matrix (goal labels)
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 20.0,
            bottom: 20.0,
            left: 180.0,
        }
    }
}

/// Fill colors per coverage level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// No coverage
    pub none: String,
    /// One program
    pub single: String,
    /// Two or more programs
    pub overlap: String,
    /// Hover outline
    pub highlight: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            none: "transparent".to_string(),
            single: "#3498db".to_string(),
            overlap: "#c0392b".to_string(),
            highlight: "#2c3e50".to_string(),
        }
    }
}

impl Palette {
    /// Fill for a coverage level
    #[must_use]
    pub fn fill(&self, level: covmat_core::CoverageLevel) -> &str {
        match level {
            covmat_core::CoverageLevel::None => &self.none,
            covmat_core::CoverageLevel::Single => &self.single,
            covmat_core::CoverageLevel::Overlap => &self.overlap,
        }
    }
}

/// Chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Outer SVG width including margins
    pub width: f64,
    /// Height of one goal row
    pub row_height: f64,
    /// Inner padding ratio of both axes
    pub padding_inner: f64,
    /// Give programs without a category value their own column
    pub include_unspecified: bool,
    /// Margins around the matrix
    pub margin: Margin,
    /// Fill colors
    pub palette: Palette,
    /// Selector options; the first is the initial selection
    pub category_options: Vec<CategoryField>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 700.0,
            row_height: 20.0,
            padding_inner: DEFAULT_PADDING_INNER,
            include_unspecified: true,
            margin: Margin::default(),
            palette: Palette::default(),
            category_options: CategoryField::defaults(),
        }
    }
}

impl ChartConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// Returns [`ConfigError`] on malformed TOML or unusable values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded chart config from {}", path.display());
        Ok(config)
    }

    /// With outer width
    #[inline]
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// With goal row height
    #[inline]
    #[must_use]
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// With selector options
    #[inline]
    #[must_use]
    pub fn with_category_options(mut self, options: Vec<CategoryField>) -> Self {
        self.category_options = options;
        self
    }

    /// Check values are usable
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "row_height must be positive, got {}",
                self.row_height
            )));
        }
        if !(0.0..=1.0).contains(&self.padding_inner) {
            return Err(ConfigError::Invalid(format!(
                "padding_inner must be within [0, 1], got {}",
                self.padding_inner
            )));
        }
        if !self.width.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "width must be finite, got {}",
                self.width
            )));
        }
        let margin = &self.margin;
        for (side, value) in [
            ("top", margin.top),
            ("right", margin.right),
            ("bottom", margin.bottom),
            ("left", margin.left),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "margin.{side} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.inner_width() <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "width {} leaves no room inside margins {} + {}",
                self.width, self.margin.left, self.margin.right
            )));
        }
        if self.category_options.is_empty() {
            return Err(ConfigError::Invalid(
                "category_options must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Width available to the matrix
    #[inline]
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Initially selected category field
    #[must_use]
    pub fn initial_category(&self) -> CategoryField {
        self.category_options.first().cloned().unwrap_or_default()
    }

    /// Extents for the core layout
    #[must_use]
    pub fn layout(&self) -> LayoutSpec {
        LayoutSpec::default()
            .with_width(self.inner_width())
            .with_row_height(self.row_height)
            .with_padding_inner(self.padding_inner)
            .with_unspecified_column(self.include_unspecified)
    }
}

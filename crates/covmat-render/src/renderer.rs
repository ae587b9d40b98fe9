//! Renderer trait and output format selection

use crate::config::ChartConfig;
use crate::error::RenderError;
use crate::json::JsonRenderer;
use crate::svg::SvgRenderer;
use crate::text::TextRenderer;
use covmat_core::RenderState;
use covmat_model::Dataset;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Output format for one render state
///
/// Renderers only read the state; they never aggregate or rescale.
pub trait Renderer: Send + Sync + fmt::Debug {
    /// Produce the output document
    ///
    /// # Errors
    /// Returns [`RenderError`] if the document cannot be written.
    fn render(&self, state: &RenderState, dataset: &Dataset) -> Result<String, RenderError>;

    /// Format name (for logs and CLI)
    fn name(&self) -> &'static str;

    /// Conventional file extension
    fn extension(&self) -> &'static str;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// SVG chart
    #[default]
    Svg,
    /// Fixed-width text grid
    Text,
    /// Render state as JSON
    Json,
}

impl OutputFormat {
    /// All formats
    pub const ALL: [Self; 3] = [Self::Svg, Self::Text, Self::Json];

    /// Format name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RenderError::UnknownFormat(s.to_string()))
    }
}

/// Renderer for `format` using `config`
#[must_use]
pub fn renderer_for(format: OutputFormat, config: &ChartConfig) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Svg => Box::new(SvgRenderer::new(config.clone())),
        OutputFormat::Text => Box::new(TextRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer::pretty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_names() {
        assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!(matches!(
            "pdf".parse::<OutputFormat>(),
            Err(RenderError::UnknownFormat(_))
        ));
    }

    #[test]
    fn renderer_matches_format() {
        let config = ChartConfig::default();
        for format in OutputFormat::ALL {
            assert_eq!(renderer_for(format, &config).name(), format.as_str());
        }
    }
}

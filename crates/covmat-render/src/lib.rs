//! CovMat Render
//!
//! Turns a [`RenderState`](covmat_core::RenderState) into output documents.
//!
//! # Core Concepts
//!
//! - [`ChartConfig`]: margins, extents, palette and selector options (TOML)
//! - [`Renderer`]: trait every output format implements
//! - [`SvgRenderer`]: the interactive chart (cells, both axes, hover titles)
//! - [`TextRenderer`]: fixed-width grid for terminals
//! - [`JsonRenderer`]: the render state as JSON for other front ends
//! - [`Tooltip`]: hover text for one cell

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod json;
mod renderer;
mod svg;
mod text;
mod tooltip;

pub use config::{ChartConfig, Margin, Palette};
pub use error::{ConfigError, RenderError};
pub use json::JsonRenderer;
pub use renderer::{renderer_for, OutputFormat, Renderer};
pub use svg::SvgRenderer;
pub use text::TextRenderer;
pub use tooltip::Tooltip;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

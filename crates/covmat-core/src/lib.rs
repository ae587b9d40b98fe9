//! CovMat Core
//!
//! Pure derivations that turn goal and program rows into a placed coverage matrix.
//!
//! # Core Concepts
//!
//! - [`aggregate`]: program rows -> per (goal, category) [`Cell`]s
//! - [`goal_domain`] / [`category_domain`]: data-derived axis domains
//! - [`BandScale`]: position and size of each band along one axis
//! - [`level_for`]: coverage count -> [`CoverageLevel`]
//! - [`RenderState`]: immutable snapshot handed to a renderer
//! - [`on_category_changed`]: the single entry point for a selection change
//!
//! Nothing here performs I/O or holds state between calls.
//!
//! # Example
//!
//! ```rust
//! use covmat_core::{on_category_changed, CoverageLevel, LayoutSpec};
//! use covmat_model::{CategoryField, CategoryValue, Dataset, Goal, Program};
//!
//! let dataset = Dataset::new(
//!     vec![Goal::new("G-01", "Counting"), Goal::new("G-02", "Phonics")],
//!     vec![
//!         Program::new("P1", "G-01, G-02").with_rigor("High"),
//!         Program::new("P2", "G-02").with_rigor("High"),
//!     ],
//! )?;
//!
//! let state = on_category_changed(&dataset, CategoryField::Rigor, &LayoutSpec::default());
//! let high = CategoryValue::named("High");
//!
//! assert_eq!(state.level_at("G-01", &high), CoverageLevel::Single);
//! assert_eq!(state.level_at("G-02", &high), CoverageLevel::Overlap);
//! # Ok::<(), covmat_model::ModelError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod aggregate;
mod coloring;
mod domain;
mod scale;
mod state;
mod summary;

// Re-exports
pub use aggregate::aggregate;
pub use coloring::{level_for, CoverageLevel};
pub use domain::{category_domain, goal_domain};
pub use scale::{BandScale, DEFAULT_PADDING_INNER};
pub use state::{on_category_changed, LayoutSpec, PlacedCell, RenderState};
pub use summary::{CategorySummary, CoverageSummary};

pub use covmat_model::Cell;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

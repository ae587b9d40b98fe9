//! CovMat Model
//!
//! Entity types for the goal coverage matrix.
//!
//! # Overview
//!
//! - [`Goal`]: one row of the curriculum framework (the matrix rows)
//! - [`Program`]: one row of the program table, listing covered goal ids
//! - [`CategoryField`]: which program attribute drives the column axis
//! - [`CategoryValue`]: a concrete column value, or the `Unspecified` sentinel
//! - [`Cell`]: derived coverage for one (goal, category) pair
//! - [`Dataset`]: the immutable pair of goal and program collections
//!
//! # Example
//!
//! ```rust
//! use covmat_model::{CategoryField, CategoryValue, Goal, Program};
//!
//! let goal = Goal::new("G-01", "Basic Computation");
//! let program = Program::new("Math Club", "G-01, G-02").with_rigor("High");
//!
//! assert_eq!(program.goal_refs().collect::<Vec<_>>(), vec!["G-01", "G-02"]);
//! assert_eq!(
//!     program.category(&CategoryField::Rigor),
//!     CategoryValue::named("High")
//! );
//! assert_eq!(goal.label(), "Basic Computation");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod category;
pub mod cell;
pub mod dataset;
pub mod error;
pub mod goal;
pub mod program;
mod scalar;

// Re-exports
pub use category::{CategoryField, CategoryValue};
pub use cell::Cell;
pub use dataset::Dataset;
pub use error::ModelError;
pub use goal::Goal;
pub use program::Program;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for coverage model operations
    pub use crate::{Cell, CategoryField, CategoryValue, Dataset, Goal, ModelError, Program};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

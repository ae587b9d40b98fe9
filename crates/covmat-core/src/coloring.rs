//! Coloring policy: coverage count -> coverage level

use serde::{Deserialize, Serialize};

/// Visual class of a matrix cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageLevel {
    /// No program covers the pair
    None,

    /// Exactly one program covers the pair
    Single,

    /// Two or more programs cover the pair
    Overlap,
}

impl CoverageLevel {
    /// Stable lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Overlap => "overlap",
        }
    }

    /// True for `Single` and `Overlap`
    #[inline]
    #[must_use]
    pub const fn is_covered(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Classify a program count: 0 is `None`, 1 is `Single`, 2 or more is `Overlap`
#[inline]
#[must_use]
pub const fn level_for(program_count: usize) -> CoverageLevel {
    match program_count {
        0 => CoverageLevel::None,
        1 => CoverageLevel::Single,
        _ => CoverageLevel::Overlap,
    }
}

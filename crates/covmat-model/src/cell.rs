//! Cell - coverage of one goal within one category

use crate::category::CategoryValue;
use serde::Serialize;

/// Coverage of one (goal, category) pair
///
/// Only pairs covered by at least one program are materialized; an absent
/// cell means zero coverage. `program_count` always equals the number of
/// names, which is why the fields are private.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    goal_id: String,
    category: CategoryValue,
    program_count: usize,
    program_names: Vec<String>,
}

impl Cell {
    /// Create cell from its contributing program names (first-seen order)
    #[must_use]
    pub fn new(
        goal_id: impl Into<String>,
        category: CategoryValue,
        program_names: Vec<String>,
    ) -> Self {
        Self {
            goal_id: goal_id.into(),
            category,
            program_count: program_names.len(),
            program_names,
        }
    }

    /// Goal id (row)
    #[inline]
    #[must_use]
    pub fn goal_id(&self) -> &str {
        &self.goal_id
    }

    /// Category value (column)
    #[inline]
    #[must_use]
    pub fn category(&self) -> &CategoryValue {
        &self.category
    }

    /// Number of contributing programs
    #[inline]
    #[must_use]
    pub fn program_count(&self) -> usize {
        self.program_count
    }

    /// Contributing program names
    #[inline]
    #[must_use]
    pub fn program_names(&self) -> &[String] {
        &self.program_names
    }

    /// True when two or more programs cover this pair
    #[inline]
    #[must_use]
    pub fn is_overlap(&self) -> bool {
        self.program_count >= 2
    }
}

//! Hover text for a matrix cell

use covmat_model::{Cell, Dataset};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Shown when a cell references a goal the dataset cannot name
const UNKNOWN_GOAL: &str = "N/A";

/// Tooltip content for one cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// Goal id
    pub goal_id: String,
    /// Goal name, or `N/A`
    pub goal_name: String,
    /// Category value as displayed
    pub category: String,
    /// Contributing programs
    pub programs: Vec<String>,
    /// Program count when two or more programs overlap
    pub overlap: Option<usize>,
}

impl Tooltip {
    /// Build the tooltip for `cell`
    #[must_use]
    pub fn for_cell(cell: &Cell, dataset: &Dataset) -> Self {
        let goal_name = dataset
            .goal(cell.goal_id())
            .map(|g| g.name().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_GOAL.to_string());

        Self {
            goal_id: cell.goal_id().to_string(),
            goal_name,
            category: cell.category().to_string(),
            programs: cell.program_names().to_vec(),
            overlap: cell.is_overlap().then_some(cell.program_count()),
        }
    }

    /// Tooltip lines, top to bottom
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Goal: {} ({})", self.goal_id, self.goal_name),
            format!("Category: {}", self.category),
            format!("Programs: {}", self.programs.join(", ")),
            match self.overlap {
                Some(count) => format!("Overlap: {count} programs"),
                None => "Coverage".to_string(),
            },
        ]
    }
}

impl Display for Tooltip {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

//! Per-column coverage totals

use crate::coloring::CoverageLevel;
use crate::state::RenderState;
use covmat_model::CategoryValue;
use serde::Serialize;

/// Totals for one column of the matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Column value
    pub category: CategoryValue,

    /// Goals covered by exactly one program
    pub single_goals: usize,

    /// Goals covered by two or more programs
    pub overlap_goals: usize,

    /// Goals no program in this column covers
    pub uncovered_goals: usize,

    /// Sum of program counts over the column's cells
    pub contributions: usize,
}

/// Column totals for a render state, in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageSummary {
    /// Number of goal rows
    pub goal_count: usize,

    /// One entry per column
    pub categories: Vec<CategorySummary>,
}

impl CoverageSummary {
    /// Tally placed cells per column
    #[must_use]
    pub fn from_state(state: &RenderState) -> Self {
        let goal_count = state.goal_scale().len();

        let categories = state
            .category_scale()
            .domain()
            .map(|category| {
                let mut summary = CategorySummary {
                    category: category.clone(),
                    single_goals: 0,
                    overlap_goals: 0,
                    uncovered_goals: goal_count,
                    contributions: 0,
                };

                for placed in state.cells().iter().filter(|p| p.cell.category() == category) {
                    match placed.level {
                        CoverageLevel::Single => summary.single_goals += 1,
                        CoverageLevel::Overlap => summary.overlap_goals += 1,
                        CoverageLevel::None => continue,
                    }
                    summary.uncovered_goals -= 1;
                    summary.contributions += placed.cell.program_count();
                }

                summary
            })
            .collect();

        Self {
            goal_count,
            categories,
        }
    }

    /// Totals for one column
    #[must_use]
    pub fn get(&self, category: &CategoryValue) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| &c.category == category)
    }
}

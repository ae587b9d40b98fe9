//! Fixed-width text grid for terminals
//!
//! `.` no coverage, `o` one program, `#` two or more programs.

use crate::error::RenderError;
use crate::renderer::Renderer;
use covmat_core::{CoverageLevel, CoverageSummary, RenderState};
use covmat_model::Dataset;
use std::fmt::Write;

/// Longest goal label shown before truncation
const MAX_LABEL_WIDTH: usize = 32;

/// Text renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create text renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn glyph(level: CoverageLevel) -> char {
        match level {
            CoverageLevel::None => '.',
            CoverageLevel::Single => 'o',
            CoverageLevel::Overlap => '#',
        }
    }
}

fn truncate(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        label.to_string()
    } else {
        let mut short: String = label.chars().take(width.saturating_sub(1)).collect();
        short.push('~');
        short
    }
}

impl Renderer for TextRenderer {
    fn render(&self, state: &RenderState, dataset: &Dataset) -> Result<String, RenderError> {
        let columns: Vec<String> = state
            .category_scale()
            .domain()
            .map(ToString::to_string)
            .collect();

        let rows: Vec<(&str, String)> = state
            .goal_scale()
            .domain()
            .map(|id| {
                let label = dataset.goal(id).map_or(id.as_str(), |g| g.label());
                (id.as_str(), truncate(&format!("{id} {label}"), MAX_LABEL_WIDTH))
            })
            .collect();

        let label_width = rows
            .iter()
            .map(|(_, label)| label.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        writeln!(out, "Coverage by {}", state.field().label())?;
        writeln!(out)?;

        write!(out, "{:label_width$}", "")?;
        for column in &columns {
            write!(out, " | {column}")?;
        }
        writeln!(out)?;

        for (goal_id, label) in &rows {
            write!(out, "{label:label_width$}")?;
            for (column, category) in columns.iter().zip(state.category_scale().domain()) {
                let glyph = Self::glyph(state.level_at(goal_id, category));
                let width = column.chars().count();
                write!(out, " | {glyph:<width$}")?;
            }
            writeln!(out)?;
        }

        let summary = CoverageSummary::from_state(state);
        writeln!(out)?;
        for column in &summary.categories {
            writeln!(
                out,
                "{}: {} covered ({} overlap), {} uncovered",
                column.category,
                column.single_goals + column.overlap_goals,
                column.overlap_goals,
                column.uncovered_goals
            )?;
        }
        if !state.unplaced().is_empty() {
            writeln!(out, "{} cells without a column", state.unplaced().len())?;
        }

        Ok(out)
    }

    fn name(&self) -> &'static str {
        "text"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

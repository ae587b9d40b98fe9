//! SVG chart
//!
//! Layout follows the interactive chart: goal labels on a left axis, category
//! labels on a top axis, one rectangle per covered (goal, category) pair, and
//! a `<title>` per rectangle for the hover tooltip.

use crate::config::ChartConfig;
use crate::error::RenderError;
use crate::renderer::Renderer;
use crate::tooltip::Tooltip;
use covmat_core::RenderState;
use covmat_model::Dataset;
use std::fmt::Write;

/// Tick length and label offset from the axis line
const TICK_SIZE: f64 = 6.0;

/// SVG renderer
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    config: ChartConfig,
}

impl SvgRenderer {
    /// Create renderer with chart configuration
    #[inline]
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Chart configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn write_goal_axis(
        &self,
        out: &mut String,
        state: &RenderState,
        dataset: &Dataset,
    ) -> Result<(), RenderError> {
        let scale = state.goal_scale();
        writeln!(out, r#"<g class="y-axis" text-anchor="end">"#)?;
        writeln!(
            out,
            r#"<path class="domain" d="M0,0V{}" stroke="currentColor"/>"#,
            num(state.height())
        )?;
        for (goal_id, _) in scale.bands() {
            let Some(y) = scale.center(goal_id.as_str()) else {
                continue;
            };
            let label = dataset.goal(goal_id).map_or(goal_id.as_str(), |g| g.label());
            writeln!(
                out,
                r#"<g class="tick" transform="translate(0,{y})"><line x2="-{t}" stroke="currentColor"/><text x="-{o}" dy=".32em">{label}</text></g>"#,
                y = num(y),
                t = num(TICK_SIZE),
                o = num(TICK_SIZE + 3.0),
                label = escape(label),
            )?;
        }
        writeln!(out, "</g>")?;
        Ok(())
    }

    fn write_category_axis(&self, out: &mut String, state: &RenderState) -> Result<(), RenderError> {
        let scale = state.category_scale();
        writeln!(out, r#"<g class="x-axis" text-anchor="middle">"#)?;
        writeln!(
            out,
            r#"<path class="domain" d="M0,0H{}" stroke="currentColor"/>"#,
            num(state.width())
        )?;
        for (category, _) in scale.bands() {
            let Some(x) = scale.center(category) else {
                continue;
            };
            writeln!(
                out,
                r#"<g class="tick" transform="translate({x},0)"><line y2="-{t}" stroke="currentColor"/><text y="-{o}">{label}</text></g>"#,
                x = num(x),
                t = num(TICK_SIZE),
                o = num(TICK_SIZE + 3.0),
                label = escape(&category.to_string()),
            )?;
        }
        writeln!(out, "</g>")?;
        Ok(())
    }

    fn write_cells(
        &self,
        out: &mut String,
        state: &RenderState,
        dataset: &Dataset,
    ) -> Result<(), RenderError> {
        writeln!(out, r#"<g class="cells">"#)?;
        for placed in state.cells() {
            let tooltip = Tooltip::for_cell(&placed.cell, dataset);
            writeln!(
                out,
                r#"<rect class="coverage-cell" data-goal="{goal}" data-category="{category}" data-level="{level}" x="{x}" y="{y}" width="{w}" height="{h}" fill="{fill}"><title>{title}</title></rect>"#,
                goal = escape(placed.cell.goal_id()),
                category = escape(&placed.cell.category().to_string()),
                level = placed.level.as_str(),
                x = num(placed.x),
                y = num(placed.y),
                w = num(placed.width),
                h = num(placed.height),
                fill = escape(self.config.palette.fill(placed.level)),
                title = escape(&tooltip.to_string()),
            )?;
        }
        writeln!(out, "</g>")?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, state: &RenderState, dataset: &Dataset) -> Result<String, RenderError> {
        let margin = &self.config.margin;
        let width = state.width() + margin.left + margin.right;
        let height = state.height() + margin.top + margin.bottom;

        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="coverage-chart" width="{}" height="{}" font-family="sans-serif" font-size="10">"#,
            num(width),
            num(height)
        )?;
        writeln!(
            out,
            "<style>.coverage-cell:hover {{ stroke: {}; stroke-width: 2; }}</style>",
            escape(&self.config.palette.highlight)
        )?;
        writeln!(
            out,
            r#"<g transform="translate({},{})">"#,
            num(margin.left),
            num(margin.top)
        )?;

        self.write_goal_axis(&mut out, state, dataset)?;
        self.write_category_axis(&mut out, state)?;
        self.write_cells(&mut out, state, dataset)?;

        writeln!(out, "</g>")?;
        writeln!(out, "</svg>")?;

        tracing::debug!(
            "Rendered SVG with {} cells ({} bytes)",
            state.cells().len(),
            out.len()
        );
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "svg"
    }

    fn extension(&self) -> &'static str {
        "svg"
    }
}

/// Coordinate text: integers without a fraction, otherwise up to 3 decimals
fn num(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.3}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// XML text/attribute escaping
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

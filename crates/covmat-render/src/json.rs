//! JSON output: the render state plus tooltips

use crate::error::RenderError;
use crate::renderer::Renderer;
use crate::tooltip::Tooltip;
use covmat_core::{CoverageSummary, PlacedCell, RenderState};
use covmat_model::Dataset;
use serde::Serialize;

/// Serializes the render state for non-SVG front ends
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

#[derive(Serialize)]
struct Document<'a> {
    #[serde(flatten)]
    state: &'a RenderState,
    summary: CoverageSummary,
    tooltips: Vec<Tooltip>,
}

impl JsonRenderer {
    /// Compact output
    #[inline]
    #[must_use]
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented output
    #[inline]
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, state: &RenderState, dataset: &Dataset) -> Result<String, RenderError> {
        let document = Document {
            state,
            summary: CoverageSummary::from_state(state),
            tooltips: state
                .cells()
                .iter()
                .map(|p: &PlacedCell| Tooltip::for_cell(&p.cell, dataset))
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    fn name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covmat_core::{on_category_changed, LayoutSpec};
    use covmat_model::CategoryField;
    use covmat_test_utils::sample_dataset;

    #[test]
    fn document_has_state_summary_and_tooltips() {
        let dataset = sample_dataset();
        let state = on_category_changed(&dataset, CategoryField::ProgramType, &LayoutSpec::default());

        let json = JsonRenderer::compact().render(&state, &dataset).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["field"], "Program_Type");
        assert_eq!(value["category_scale"]["domain"][0], "Community");
        assert_eq!(value["summary"]["goal_count"], 10);
        assert_eq!(
            value["tooltips"].as_array().unwrap().len(),
            value["cells"].as_array().unwrap().len()
        );
        assert!(!json.contains('\n'));
    }
}

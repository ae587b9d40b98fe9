//! Render state - the immutable snapshot of one category selection
//!
//! Every selection change produces a fresh [`RenderState`]; nothing is
//! carried over from the previous one.

use crate::aggregate::aggregate;
use crate::coloring::{level_for, CoverageLevel};
use crate::domain::{category_domain, goal_domain};
use crate::scale::{BandScale, DEFAULT_PADDING_INNER};
use covmat_model::{CategoryField, CategoryValue, Cell, Dataset};
use serde::Serialize;

/// Extents the matrix is laid out in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutSpec {
    /// Horizontal extent of the category axis
    pub width: f64,

    /// Height of one goal row; matrix height is `goals * row_height`
    pub row_height: f64,

    /// Inner padding ratio of both band scales
    pub padding_inner: f64,

    /// Append an `Unspecified` column when some program has no category value
    pub include_unspecified: bool,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            width: 500.0,
            row_height: 20.0,
            padding_inner: DEFAULT_PADDING_INNER,
            include_unspecified: true,
        }
    }
}

impl LayoutSpec {
    /// With category axis width
    #[inline]
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// With goal row height
    #[inline]
    #[must_use]
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// With inner padding ratio
    #[inline]
    #[must_use]
    pub fn with_padding_inner(mut self, padding_inner: f64) -> Self {
        self.padding_inner = padding_inner;
        self
    }

    /// Toggle the `Unspecified` column
    #[inline]
    #[must_use]
    pub fn with_unspecified_column(mut self, include: bool) -> Self {
        self.include_unspecified = include;
        self
    }

    /// Matrix height for `goal_count` rows
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn matrix_height(&self, goal_count: usize) -> f64 {
        goal_count as f64 * self.row_height
    }
}

/// A cell with its rectangle and coverage level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedCell {
    /// Aggregated coverage
    #[serde(flatten)]
    pub cell: Cell,

    /// Coloring class
    pub level: CoverageLevel,

    /// Left edge (category band start)
    pub x: f64,

    /// Top edge (goal band start)
    pub y: f64,

    /// Category bandwidth
    pub width: f64,

    /// Goal bandwidth
    pub height: f64,
}

/// Everything a renderer needs for one category selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    field: CategoryField,
    goal_scale: BandScale<String>,
    category_scale: BandScale<CategoryValue>,
    cells: Vec<PlacedCell>,

    /// Cells whose category has no column
    unplaced: Vec<Cell>,
}

impl RenderState {
    /// Aggregate and lay out `dataset` for `field`
    #[must_use]
    pub fn build(dataset: &Dataset, field: CategoryField, layout: &LayoutSpec) -> Self {
        let cells = aggregate(dataset.goals(), dataset.programs(), &field);

        let goal_scale = BandScale::new(
            goal_domain(dataset.goals()),
            layout.matrix_height(dataset.goals().len()),
        )
        .with_padding_inner(layout.padding_inner);

        let mut columns = category_domain(dataset.programs(), &field);
        if layout.include_unspecified && cells.iter().any(|c| c.category().is_unspecified()) {
            columns.push(CategoryValue::Unspecified);
        }
        let category_scale =
            BandScale::new(columns, layout.width).with_padding_inner(layout.padding_inner);

        let mut placed = Vec::with_capacity(cells.len());
        let mut unplaced = Vec::new();

        for cell in cells {
            let x = category_scale.position(cell.category());
            let y = goal_scale.position(cell.goal_id());

            match (x, y) {
                (Some(x), Some(y)) => placed.push(PlacedCell {
                    level: level_for(cell.program_count()),
                    x,
                    y,
                    width: category_scale.bandwidth(),
                    height: goal_scale.bandwidth(),
                    cell,
                }),
                _ => unplaced.push(cell),
            }
        }

        Self {
            field,
            goal_scale,
            category_scale,
            cells: placed,
            unplaced,
        }
    }

    /// Active category field
    #[inline]
    #[must_use]
    pub fn field(&self) -> &CategoryField {
        &self.field
    }

    /// Row scale (goal ids)
    #[inline]
    #[must_use]
    pub fn goal_scale(&self) -> &BandScale<String> {
        &self.goal_scale
    }

    /// Column scale (category values)
    #[inline]
    #[must_use]
    pub fn category_scale(&self) -> &BandScale<CategoryValue> {
        &self.category_scale
    }

    /// Placed cells
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[PlacedCell] {
        &self.cells
    }

    /// Cells left out because their category has no column
    #[inline]
    #[must_use]
    pub fn unplaced(&self) -> &[Cell] {
        &self.unplaced
    }

    /// Matrix width
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.category_scale.length()
    }

    /// Matrix height
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.goal_scale.length()
    }

    /// Placed cell for a (goal, category) pair
    #[must_use]
    pub fn cell_at(&self, goal_id: &str, category: &CategoryValue) -> Option<&PlacedCell> {
        self.cells
            .iter()
            .find(|p| p.cell.goal_id() == goal_id && p.cell.category() == category)
    }

    /// Coverage level of a pair; absent cells are `None`
    #[must_use]
    pub fn level_at(&self, goal_id: &str, category: &CategoryValue) -> CoverageLevel {
        self.cell_at(goal_id, category)
            .map_or(CoverageLevel::None, |p| p.level)
    }
}

/// Rebuild the matrix for a newly selected category field
///
/// Called synchronously by the UI layer on every selection change. The
/// previous state is simply dropped by the caller.
#[must_use]
pub fn on_category_changed(
    dataset: &Dataset,
    field: CategoryField,
    layout: &LayoutSpec,
) -> RenderState {
    let state = RenderState::build(dataset, field, layout);

    tracing::info!(
        "Category changed to {}: {} columns, {} cells",
        state.field(),
        state.category_scale().len(),
        state.cells().len()
    );

    if !state.unplaced().is_empty() {
        tracing::warn!(
            "{} cells have no column for {} and are not drawn",
            state.unplaced().len(),
            state.field()
        );
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use covmat_model::{Goal, Program};
    use covmat_test_utils::sample_dataset;

    fn dataset(programs: Vec<Program>) -> Dataset {
        Dataset::new(
            vec![
                Goal::new("G-01", "One"),
                Goal::new("G-02", "Two"),
                Goal::new("G-03", "Three"),
            ],
            programs,
        )
        .unwrap()
    }

    #[test]
    fn cells_align_with_axis_bands() {
        let data = dataset(vec![
            Program::new("P1", "G-01, G-02").with_rigor("X"),
            Program::new("P2", "G-02").with_rigor("X"),
            Program::new("P3", "G-03").with_rigor("A"),
        ]);
        let state = RenderState::build(&data, CategoryField::Rigor, &LayoutSpec::default());

        let x = CategoryValue::named("X");
        let placed = state.cell_at("G-02", &x).unwrap();
        assert_eq!(Some(placed.x), state.category_scale().position(&x));
        assert_eq!(Some(placed.y), state.goal_scale().position("G-02"));
        assert!((placed.width - state.category_scale().bandwidth()).abs() < 1e-9);
        assert!((placed.height - state.goal_scale().bandwidth()).abs() < 1e-9);
        assert_eq!(placed.level, CoverageLevel::Overlap);

        // "A" sorts before "X"
        assert_eq!(state.category_scale().index_of(&CategoryValue::named("A")), Some(0));
        assert_eq!(state.level_at("G-03", &x), CoverageLevel::None);
    }

    #[test]
    fn height_follows_row_count() {
        let state = RenderState::build(
            &dataset(vec![]),
            CategoryField::Rigor,
            &LayoutSpec::default().with_row_height(20.0),
        );
        assert!((state.height() - 60.0).abs() < 1e-9);
        assert!(state.cells().is_empty());
        assert!(state.category_scale().is_empty());
    }

    #[test]
    fn unspecified_column_is_appended() {
        let data = dataset(vec![
            Program::new("P1", "G-01").with_rigor("High"),
            Program::new("P2", "G-02"),
        ]);
        let state = RenderState::build(&data, CategoryField::Rigor, &LayoutSpec::default());

        let columns: Vec<_> = state.category_scale().domain().cloned().collect();
        assert_eq!(
            columns,
            vec![CategoryValue::named("High"), CategoryValue::Unspecified]
        );
        assert_eq!(state.cells().len(), 2);
        assert!(state.unplaced().is_empty());
    }

    #[test]
    fn unspecified_cells_are_reported_when_column_disabled() {
        let data = dataset(vec![
            Program::new("P1", "G-01").with_rigor("High"),
            Program::new("P2", "G-02"),
        ]);
        let layout = LayoutSpec::default().with_unspecified_column(false);
        let state = on_category_changed(&data, CategoryField::Rigor, &layout);

        assert_eq!(state.category_scale().len(), 1);
        assert_eq!(state.cells().len(), 1);
        assert_eq!(state.unplaced().len(), 1);
        assert_eq!(state.unplaced()[0].goal_id(), "G-02");
    }

    #[test]
    fn switching_fields_rebuilds_everything() {
        let data = sample_dataset();
        let layout = LayoutSpec::default();

        let by_rigor = on_category_changed(&data, CategoryField::Rigor, &layout);
        let by_type = on_category_changed(&data, CategoryField::ProgramType, &layout);

        assert_eq!(by_rigor.category_scale().len(), 3);
        assert_eq!(by_type.category_scale().len(), 2);
        assert_eq!(by_type.field(), &CategoryField::ProgramType);

        let again = on_category_changed(&data, CategoryField::Rigor, &layout);
        assert_eq!(again, by_rigor);
    }

    #[test]
    fn serializes_for_renderers() {
        let state = on_category_changed(&sample_dataset(), CategoryField::Rigor, &LayoutSpec::default());
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["field"], "Rigor");
        assert_eq!(json["category_scale"]["domain"][0], "High");
        assert!(json["cells"][0]["level"].is_string());
        assert!(json["cells"][0]["goal_id"].is_string());
    }
}

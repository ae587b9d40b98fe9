//! Coverage aggregation
//!
//! Groups programs by the active category, then by referenced goal, and
//! emits one [`Cell`] per non-empty group.

use covmat_model::{CategoryField, CategoryValue, Cell, Goal, Program};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Aggregate program coverage into cells
///
/// - References to ids outside `goals` are dropped without error.
/// - Programs with no references contribute nothing.
/// - Programs with a blank category land in [`CategoryValue::Unspecified`].
/// - Program names keep first-seen order; repeats (including a goal listed
///   twice by one program) are kept, so each repeat counts.
///
/// Cells come out grouped by category in first-seen program order, then by
/// goal in first-seen reference order. Zero-count cells are never emitted.
#[must_use]
pub fn aggregate(goals: &[Goal], programs: &[Program], field: &CategoryField) -> Vec<Cell> {
    let universe: HashSet<&str> = goals.iter().map(Goal::id).collect();

    let mut groups: IndexMap<CategoryValue, IndexMap<&str, Vec<String>>> = IndexMap::new();
    let mut dangling = 0usize;

    for program in programs {
        let by_goal = groups.entry(program.category(field)).or_default();

        for goal_id in program.goal_refs() {
            if !universe.contains(goal_id) {
                dangling += 1;
                continue;
            }
            by_goal
                .entry(goal_id)
                .or_default()
                .push(program.name().to_string());
        }
    }

    let cells: Vec<Cell> = groups
        .into_iter()
        .flat_map(|(category, by_goal)| {
            by_goal
                .into_iter()
                .map(move |(goal_id, names)| Cell::new(goal_id, category.clone(), names))
        })
        .collect();

    tracing::debug!(
        "Aggregated {} programs by {} into {} cells ({} dangling references)",
        programs.len(),
        field,
        cells.len(),
        dangling
    );

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use covmat_test_utils::{sample_goals, sample_programs};
    use pretty_assertions::assert_eq;

    fn goals(ids: &[&str]) -> Vec<Goal> {
        ids.iter().map(|id| Goal::new(*id, format!("Goal {id}"))).collect()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn overlapping_programs_share_a_cell() {
        let goals = goals(&["G-01", "G-02", "G-03"]);
        let programs = vec![
            Program::new("P1", "G-01, G-02").with_column("cat", "X"),
            Program::new("P2", "G-02").with_column("cat", "X"),
        ];

        let cells = aggregate(&goals, &programs, &CategoryField::from_column("cat"));

        let x = CategoryValue::named("X");
        assert_eq!(
            cells,
            vec![
                Cell::new("G-01", x.clone(), names(&["P1"])),
                Cell::new("G-02", x, names(&["P1", "P2"])),
            ]
        );
        assert!(cells.iter().all(|c| c.goal_id() != "G-03"));
    }

    #[test]
    fn dangling_references_are_dropped() {
        let goals = goals(&["G-01"]);
        let programs = vec![Program::new("P1", "G-01, G-99").with_rigor("High")];

        let cells = aggregate(&goals, &programs, &CategoryField::Rigor);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].goal_id(), "G-01");
    }

    #[test]
    fn empty_goal_text_contributes_nothing() {
        let goals = goals(&["G-01"]);
        let programs = vec![
            Program::new("Blank", "").with_rigor("Low"),
            Program::without_goals("Missing").with_rigor("Low"),
        ];

        assert!(aggregate(&goals, &programs, &CategoryField::Rigor).is_empty());
    }

    #[test]
    fn no_programs_no_cells() {
        assert!(aggregate(&goals(&["G-01"]), &[], &CategoryField::Rigor).is_empty());
    }

    #[test]
    fn missing_category_groups_under_unspecified() {
        let goals = goals(&["G-01"]);
        let programs = vec![
            Program::new("P1", "G-01"),
            Program::new("P2", "G-01").with_rigor("  "),
        ];

        let cells = aggregate(&goals, &programs, &CategoryField::Rigor);

        assert_eq!(
            cells,
            vec![Cell::new("G-01", CategoryValue::Unspecified, names(&["P1", "P2"]))]
        );
    }

    #[test]
    fn repeated_references_count_twice() {
        let goals = goals(&["G-01"]);
        let programs = vec![Program::new("P1", "G-01, G-01").with_rigor("High")];

        let cells = aggregate(&goals, &programs, &CategoryField::Rigor);

        assert_eq!(cells[0].program_count(), 2);
        assert_eq!(cells[0].program_names(), ["P1", "P1"]);
    }

    #[test]
    fn duplicate_program_names_are_preserved() {
        let goals = goals(&["G-01"]);
        let programs = vec![
            Program::new("Tutoring", "G-01").with_rigor("Low"),
            Program::new("Tutoring", "G-01").with_rigor("Low"),
        ];

        let cells = aggregate(&goals, &programs, &CategoryField::Rigor);
        assert_eq!(cells[0].program_names(), ["Tutoring", "Tutoring"]);
    }

    #[test]
    fn sample_data_by_rigor() {
        let cells = aggregate(&sample_goals(), &sample_programs(), &CategoryField::Rigor);
        let high = CategoryValue::named("High");

        let g06 = cells
            .iter()
            .find(|c| c.goal_id() == "G-06" && c.category() == &high)
            .unwrap();
        assert_eq!(g06.program_names(), ["Math Club", "Advanced Study Group"]);

        let g09 = cells
            .iter()
            .find(|c| c.goal_id() == "G-09" && c.category() == &high)
            .unwrap();
        assert_eq!(g09.program_names(), ["History Bee Prep", "Advanced Study Group"]);

        // Categories in first-seen order: High, Medium, Low
        let order: Vec<_> = cells.iter().map(|c| c.category().clone()).collect();
        assert_eq!(order.first(), Some(&high));
        assert_eq!(order.last(), Some(&CategoryValue::named("Low")));
    }

    #[test]
    fn sample_data_by_program_type() {
        let cells = aggregate(&sample_goals(), &sample_programs(), &CategoryField::ProgramType);
        let district = CategoryValue::named("District");

        let g06 = cells
            .iter()
            .find(|c| c.goal_id() == "G-06" && c.category() == &district)
            .unwrap();
        assert_eq!(g06.program_count(), 2);

        let total: usize = cells.iter().map(Cell::program_count).sum();
        assert_eq!(total, 15);
    }
}

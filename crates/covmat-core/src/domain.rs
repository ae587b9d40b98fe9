//! Axis domains derived from the data
//!
//! Rows follow the framework order; columns are the distinct observed values
//! of the active field in ascending lexical order.

use covmat_model::{CategoryField, CategoryValue, Goal, Program};
use std::collections::BTreeSet;

/// Goal ids in framework order
#[must_use]
pub fn goal_domain(goals: &[Goal]) -> Vec<String> {
    goals.iter().map(|g| g.id().to_string()).collect()
}

/// Distinct named values of `field`, sorted ascending
///
/// Programs with a blank or missing value do not add a column.
#[must_use]
pub fn category_domain(programs: &[Program], field: &CategoryField) -> Vec<CategoryValue> {
    programs
        .iter()
        .map(|p| p.category(field))
        .filter(|value| !value.is_unspecified())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn goal_domain_keeps_framework_order() {
        let goals = vec![
            Goal::new("G-03", "c"),
            Goal::new("G-01", "a"),
            Goal::new("G-02", "b"),
        ];
        assert_eq!(goal_domain(&goals), vec!["G-03", "G-01", "G-02"]);
        assert_eq!(goal_domain(&goals), goal_domain(&goals));
    }

    #[test]
    fn category_domain_sorts_and_dedups() {
        let programs = vec![
            Program::new("A", "").with_rigor("Medium"),
            Program::new("B", "").with_rigor("High"),
            Program::new("C", "").with_rigor("High"),
        ];
        assert_eq!(
            category_domain(&programs, &CategoryField::Rigor),
            vec![CategoryValue::named("High"), CategoryValue::named("Medium")]
        );
    }

    #[test]
    fn category_domain_skips_blank_values() {
        let programs = vec![
            Program::new("A", "").with_rigor(""),
            Program::new("B", ""),
            Program::new("C", "").with_rigor("Low"),
        ];
        assert_eq!(
            category_domain(&programs, &CategoryField::Rigor),
            vec![CategoryValue::named("Low")]
        );
    }

    #[test]
    fn category_domain_of_nothing_is_empty() {
        assert!(category_domain(&[], &CategoryField::ProgramType).is_empty());
    }
}

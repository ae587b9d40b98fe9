//! Dataset - the goal and program collections of one session

use crate::error::ModelError;
use crate::goal::Goal;
use crate::program::Program;
use indexmap::IndexMap;

/// Goals and programs as loaded for a rendering session
///
/// Built once and never mutated. Goal order is the canonical row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    goals: Vec<Goal>,
    programs: Vec<Program>,

    /// Goal id -> row index
    index: IndexMap<String, usize>,
}

impl Dataset {
    /// Assemble a dataset, rejecting blank or duplicate goal ids
    ///
    /// # Errors
    /// Returns [`ModelError`] when a goal id is blank or repeated.
    pub fn new(goals: Vec<Goal>, programs: Vec<Program>) -> Result<Self, ModelError> {
        let mut index = IndexMap::with_capacity(goals.len());

        for (row, goal) in goals.iter().enumerate() {
            if goal.id().trim().is_empty() {
                return Err(ModelError::BlankGoalId { row });
            }
            if let Some(&first) = index.get(goal.id()) {
                return Err(ModelError::DuplicateGoalId {
                    id: goal.id().to_string(),
                    first,
                    second: row,
                });
            }
            index.insert(goal.id().to_string(), row);
        }

        Ok(Self {
            goals,
            programs,
            index,
        })
    }

    /// Goals in framework order
    #[inline]
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Programs in table order
    #[inline]
    #[must_use]
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// Look up a goal by id
    #[must_use]
    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.index.get(id).map(|&row| &self.goals[row])
    }

    /// Check membership in the goal universe
    #[inline]
    #[must_use]
    pub fn contains_goal(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// True when there are no goals (nothing to draw)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let dataset = Dataset::new(
            vec![Goal::new("G-01", "Basic Computation"), Goal::new("G-02", "Phonics")],
            vec![],
        )
        .unwrap();

        assert_eq!(dataset.goal("G-02").map(Goal::name), Some("Phonics"));
        assert!(dataset.contains_goal("G-01"));
        assert!(!dataset.contains_goal("G-99"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Dataset::new(
            vec![Goal::new("G-01", "A"), Goal::new("G-02", "B"), Goal::new("G-01", "C")],
            vec![],
        )
        .unwrap_err();

        assert_eq!(
            err,
            ModelError::DuplicateGoalId {
                id: "G-01".to_string(),
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn rejects_blank_ids() {
        let err = Dataset::new(vec![Goal::new(" ", "A")], vec![]).unwrap_err();
        assert_eq!(err, ModelError::BlankGoalId { row: 0 });
    }

    #[test]
    fn empty_dataset_is_valid() {
        let dataset = Dataset::new(vec![], vec![]).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.programs().is_empty());
    }
}

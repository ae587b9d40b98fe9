//! Testing utilities for CovMat workspace
//!
//! Shared fixtures and builders.

#![allow(missing_docs)]

use covmat_model::{Dataset, Goal, Program};

pub use covmat_loader::{sample_goals, sample_programs};

/// The demo tables as a dataset
pub fn sample_dataset() -> Dataset {
    Dataset::new(sample_goals(), sample_programs()).expect("sample goal ids are unique")
}

/// Goals named after their ids
pub fn goals(ids: &[&str]) -> Vec<Goal> {
    ids.iter().map(|id| Goal::new(*id, format!("Goal {id}"))).collect()
}

/// Program with a rigor value
pub fn rigor_program(name: &str, goals_covered: &str, rigor: &str) -> Program {
    Program::new(name, goals_covered).with_rigor(rigor)
}

/// Dataset over `ids` with the given programs
pub fn dataset(ids: &[&str], programs: Vec<Program>) -> Dataset {
    Dataset::new(goals(ids), programs).expect("fixture goal ids are unique")
}

//! Built-in demo tables for running without any source files

use covmat_model::{Goal, Program};

/// Demo framework: ten goals spanning grades K through 9
#[must_use]
pub fn sample_goals() -> Vec<Goal> {
    [
        ("G-01", "Basic Computation", "K"),
        ("G-02", "Phonological Awareness", "1"),
        ("G-03", "Simple Measurement", "1"),
        ("G-04", "Introduction to History", "2"),
        ("G-05", "Ecosystems", "3"),
        ("G-06", "Decimals and Fractions", "4"),
        ("G-07", "Essay Structure", "5"),
        ("G-08", "Algebraic Thinking", "6"),
        ("G-09", "Constitutional Law", "8"),
        ("G-10", "Scientific Inquiry", "9"),
    ]
    .into_iter()
    .map(|(id, name, grade)| Goal::new(id, name).with_grade(grade))
    .collect()
}

/// Demo programs; G-06, G-08 and G-09 overlap in the `High` rigor column
#[must_use]
pub fn sample_programs() -> Vec<Program> {
    [
        ("Math Club", "G-06, G-08", "High", "District"),
        ("Summer Literacy", "G-02, G-07", "Medium", "District"),
        ("Community Tutoring", "G-01, G-02, G-03, G-06", "Low", "Community"),
        ("History Bee Prep", "G-04, G-09", "High", "Community"),
        ("Science Camp", "G-05, G-10", "Medium", "Community"),
        ("Advanced Study Group", "G-06, G-08, G-09", "High", "District"),
    ]
    .into_iter()
    .map(|(name, goals, rigor, program_type)| {
        Program::new(name, goals)
            .with_rigor(rigor)
            .with_program_type(program_type)
    })
    .collect()
}

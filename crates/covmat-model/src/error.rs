//! Error types for the coverage model

/// Errors raised while assembling a [`Dataset`](crate::Dataset)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Two framework rows share the same goal id
    #[error("duplicate goal id '{id}' at rows {first} and {second}")]
    DuplicateGoalId {
        /// The repeated id
        id: String,
        /// Row index of the first occurrence
        first: usize,
        /// Row index of the repeat
        second: usize,
    },

    /// A framework row has an empty id
    #[error("goal at row {row} has a blank id")]
    BlankGoalId {
        /// Row index of the offending goal
        row: usize,
    },
}

//! Goal - one row of the curriculum framework

use serde::{Deserialize, Serialize};

/// Curriculum goal
///
/// The `id` is the join key referenced by [`Program::goal_refs`](crate::Program::goal_refs).
/// The order of goals in a [`Dataset`](crate::Dataset) is the row order of the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "GoalRow")]
pub struct Goal {
    /// Unique goal id (e.g. `G-01`)
    #[serde(rename = "ID")]
    id: String,

    /// Human readable goal name
    #[serde(rename = "Name")]
    name: String,

    /// Grade band, when the framework provides one
    #[serde(rename = "Grade", skip_serializing_if = "Option::is_none")]
    grade: Option<String>,
}

/// Wire shape of a framework row
#[derive(Deserialize)]
struct GoalRow {
    #[serde(rename = "ID", deserialize_with = "crate::scalar::required")]
    id: String,

    #[serde(rename = "Name", default, deserialize_with = "crate::scalar::optional")]
    name: Option<String>,

    #[serde(rename = "Grade", default, deserialize_with = "crate::scalar::optional")]
    grade: Option<String>,
}

impl From<GoalRow> for Goal {
    fn from(row: GoalRow) -> Self {
        Self {
            id: row.id,
            name: row.name.unwrap_or_default(),
            grade: row.grade,
        }
    }
}

impl Goal {
    /// Create goal without a grade
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grade: None,
        }
    }

    /// Set grade band
    #[inline]
    #[must_use]
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    /// Goal id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Goal name (may be empty)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grade band
    #[inline]
    #[must_use]
    pub fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }

    /// Axis label: the name, falling back to the id when the name is blank
    #[must_use]
    pub fn label(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

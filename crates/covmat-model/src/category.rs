//! Category selection for the column axis
//!
//! Provides [`CategoryField`] (which program attribute defines the columns) and
//! [`CategoryValue`] (one column value, or the `Unspecified` sentinel).

use serde::{Deserialize, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Program attribute that defines the column axis
///
/// Exactly one field is active at a time. Changing it rebuilds the whole
/// matrix; nothing is updated incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryField {
    /// `Rigor` column
    #[default]
    Rigor,

    /// `Program_Type` column
    ProgramType,

    /// Any other categorical column, by name
    Column(String),
}

impl CategoryField {
    /// Column name for `Rigor`
    pub const RIGOR: &'static str = "Rigor";

    /// Column name for `Program_Type`
    pub const PROGRAM_TYPE: &'static str = "Program_Type";

    /// Resolve a column name, mapping the built-in columns to their variants
    #[must_use]
    pub fn from_column(name: &str) -> Self {
        match name {
            Self::RIGOR => Self::Rigor,
            Self::PROGRAM_TYPE => Self::ProgramType,
            other => Self::Column(other.to_string()),
        }
    }

    /// Source column name
    #[inline]
    #[must_use]
    pub fn column(&self) -> &str {
        match self {
            Self::Rigor => Self::RIGOR,
            Self::ProgramType => Self::PROGRAM_TYPE,
            Self::Column(name) => name,
        }
    }

    /// Selector text: the column name with underscores shown as spaces
    #[must_use]
    pub fn label(&self) -> String {
        self.column().replace('_', " ")
    }

    /// Built-in selector options; the first one is the initial selection
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![Self::Rigor, Self::ProgramType]
    }
}

impl Display for CategoryField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for CategoryField {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_column(s))
    }
}

impl From<String> for CategoryField {
    fn from(name: String) -> Self {
        Self::from_column(&name)
    }
}

impl From<CategoryField> for String {
    fn from(field: CategoryField) -> Self {
        field.column().to_string()
    }
}

/// Value of the active category field for one program
///
/// Missing, null and whitespace-only values collapse into [`Unspecified`],
/// which orders after every named value.
///
/// [`Unspecified`]: CategoryValue::Unspecified
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryValue {
    /// A concrete value as written in the source table
    Named(String),

    /// The program has no value for the field
    Unspecified,
}

impl CategoryValue {
    /// Display text of the sentinel bucket
    pub const UNSPECIFIED_LABEL: &'static str = "Unspecified";

    /// Create a named value
    #[inline]
    #[must_use]
    pub fn named(value: impl Into<String>) -> Self {
        Self::Named(value.into())
    }

    /// Classify a raw cell: blank or missing becomes `Unspecified`
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if !value.trim().is_empty() => Self::Named(value.to_string()),
            _ => Self::Unspecified,
        }
    }

    /// True for the sentinel bucket
    #[inline]
    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }

    /// Named value, if any
    #[inline]
    #[must_use]
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Named(value) => Some(value),
            Self::Unspecified => None,
        }
    }
}

impl Display for CategoryValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(value) => f.write_str(value),
            Self::Unspecified => f.write_str(Self::UNSPECIFIED_LABEL),
        }
    }
}

// Serialized as the raw value, with `null` for the sentinel.
impl Serialize for CategoryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Named(value) => serializer.serialize_some(value),
            Self::Unspecified => serializer.serialize_none(),
        }
    }
}

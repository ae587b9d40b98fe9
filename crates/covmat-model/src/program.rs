//! Program - one row of the program table

use crate::category::{CategoryField, CategoryValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Program row
///
/// `goals_covered` is kept as the free text staff typed into the sheet
/// (comma separated ids, arbitrary whitespace). Columns other than the four
/// known ones are retained in `extra` so any of them can drive the column axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProgramRow")]
pub struct Program {
    /// Program display name
    #[serde(rename = "Program_Name")]
    name: String,

    /// Raw comma separated goal references
    #[serde(rename = "Goals_Covered", skip_serializing_if = "Option::is_none")]
    goals_covered: Option<String>,

    /// Rigor level
    #[serde(rename = "Rigor", skip_serializing_if = "Option::is_none")]
    rigor: Option<String>,

    /// Program type
    #[serde(rename = "Program_Type", skip_serializing_if = "Option::is_none")]
    program_type: Option<String>,

    /// Remaining categorical columns, in source column order
    #[serde(flatten)]
    extra: IndexMap<String, String>,
}

/// Wire shape of a program row
#[derive(Deserialize)]
struct ProgramRow {
    #[serde(rename = "Program_Name", deserialize_with = "crate::scalar::required")]
    name: String,

    #[serde(rename = "Goals_Covered", default, deserialize_with = "crate::scalar::optional")]
    goals_covered: Option<String>,

    #[serde(rename = "Rigor", default, deserialize_with = "crate::scalar::optional")]
    rigor: Option<String>,

    #[serde(rename = "Program_Type", default, deserialize_with = "crate::scalar::optional")]
    program_type: Option<String>,

    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

impl From<ProgramRow> for Program {
    fn from(row: ProgramRow) -> Self {
        let extra = row
            .extra
            .into_iter()
            .filter_map(|(column, value)| {
                crate::scalar::scalar_to_string(value).map(|text| (column, text))
            })
            .collect();

        Self {
            name: row.name,
            goals_covered: row.goals_covered,
            rigor: row.rigor,
            program_type: row.program_type,
            extra,
        }
    }
}

impl Program {
    /// Create program with its raw goal reference text
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, goals_covered: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            goals_covered: Some(goals_covered.into()),
            rigor: None,
            program_type: None,
            extra: IndexMap::new(),
        }
    }

    /// Create program with no goal references at all
    #[inline]
    #[must_use]
    pub fn without_goals(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            goals_covered: None,
            rigor: None,
            program_type: None,
            extra: IndexMap::new(),
        }
    }

    /// Set rigor level
    #[inline]
    #[must_use]
    pub fn with_rigor(mut self, rigor: impl Into<String>) -> Self {
        self.rigor = Some(rigor.into());
        self
    }

    /// Set program type
    #[inline]
    #[must_use]
    pub fn with_program_type(mut self, program_type: impl Into<String>) -> Self {
        self.program_type = Some(program_type.into());
        self
    }

    /// Set any other categorical column
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        let column = column.into();
        match CategoryField::from_column(&column) {
            CategoryField::Rigor => self.rigor = Some(value.into()),
            CategoryField::ProgramType => self.program_type = Some(value.into()),
            CategoryField::Column(_) => {
                self.extra.insert(column, value.into());
            }
        }
        self
    }

    /// Program name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw `Goals_Covered` text
    #[inline]
    #[must_use]
    pub fn goals_covered(&self) -> Option<&str> {
        self.goals_covered.as_deref()
    }

    /// Rigor level
    #[inline]
    #[must_use]
    pub fn rigor(&self) -> Option<&str> {
        self.rigor.as_deref()
    }

    /// Program type
    #[inline]
    #[must_use]
    pub fn program_type(&self) -> Option<&str> {
        self.program_type.as_deref()
    }

    /// Extra columns
    #[inline]
    #[must_use]
    pub fn extra(&self) -> &IndexMap<String, String> {
        &self.extra
    }

    /// Referenced goal ids, in written order
    ///
    /// Splits on commas and trims each piece. Empty pieces (blank text,
    /// trailing commas) are skipped. Repeats are kept.
    pub fn goal_refs(&self) -> impl Iterator<Item = &str> + '_ {
        self.goals_covered
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Raw value of a categorical column
    #[must_use]
    pub fn raw_category(&self, field: &CategoryField) -> Option<&str> {
        match field {
            CategoryField::Rigor => self.rigor(),
            CategoryField::ProgramType => self.program_type(),
            CategoryField::Column(column) => self.extra.get(column).map(String::as_str),
        }
    }

    /// Column value for `field`; blank or missing is [`CategoryValue::Unspecified`]
    #[must_use]
    pub fn category(&self, field: &CategoryField) -> CategoryValue {
        CategoryValue::from_raw(self.raw_category(field))
    }
}

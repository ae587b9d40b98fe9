//! Row parsers for the source table formats
//!
//! Each parser decodes a whole table (a sequence of row objects) into typed
//! rows. Parsers are selected by file extension through a [`ParserRegistry`].

use crate::error::RowError;
use covmat_model::{Goal, Program};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;

/// Decoder for one table format
///
/// Implement this trait to add support for new export formats.
pub trait RowParser: Send + Sync + 'static {
    /// Supported file extensions (without dot, lowercase)
    fn extensions(&self) -> &[&str];

    /// Decode framework rows
    ///
    /// # Errors
    /// Returns [`RowError`] when the text is not a sequence of goal rows.
    fn parse_goals(&self, text: &str) -> Result<Vec<Goal>, RowError>;

    /// Decode program rows
    ///
    /// # Errors
    /// Returns [`RowError`] when the text is not a sequence of program rows.
    fn parse_programs(&self, text: &str) -> Result<Vec<Program>, RowError>;

    /// Check if this parser can handle the given path
    fn can_parse(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

/// A row type decodable by any [`RowParser`]
pub(crate) trait Row: Sized {
    /// Table name used in logs
    const TABLE: &'static str;

    fn decode(parser: &dyn RowParser, text: &str) -> Result<Vec<Self>, RowError>;
}

impl Row for Goal {
    const TABLE: &'static str = "framework";

    fn decode(parser: &dyn RowParser, text: &str) -> Result<Vec<Self>, RowError> {
        parser.parse_goals(text)
    }
}

impl Row for Program {
    const TABLE: &'static str = "programs";

    fn decode(parser: &dyn RowParser, text: &str) -> Result<Vec<Self>, RowError> {
        parser.parse_programs(text)
    }
}

/// JSON array of row objects
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRows;

impl JsonRows {
    fn rows<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, RowError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl RowParser for JsonRows {
    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse_goals(&self, text: &str) -> Result<Vec<Goal>, RowError> {
        Self::rows(text)
    }

    fn parse_programs(&self, text: &str) -> Result<Vec<Program>, RowError> {
        Self::rows(text)
    }
}

/// YAML sequence of row mappings
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlRows;

impl YamlRows {
    fn rows<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, RowError> {
        // An empty document is an empty table
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

impl RowParser for YamlRows {
    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn parse_goals(&self, text: &str) -> Result<Vec<Goal>, RowError> {
        Self::rows(text)
    }

    fn parse_programs(&self, text: &str) -> Result<Vec<Program>, RowError> {
        Self::rows(text)
    }
}

/// Comma separated table with a header row (spreadsheet export)
///
/// Each record becomes a row object keyed by header, so unknown columns are
/// still captured. Blank cells are treated as missing and fully blank
/// records are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRows;

impl CsvRows {
    fn rows<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, RowError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(text.trim_start_matches('\u{feff}').as_bytes());
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            let row: Map<String, Value> = headers
                .iter()
                .zip(record.iter())
                .filter(|(column, _)| !column.is_empty())
                .map(|(column, cell)| {
                    let value = if cell.trim().is_empty() {
                        Value::Null
                    } else {
                        Value::String(cell.to_string())
                    };
                    (column.to_string(), value)
                })
                .collect();
            rows.push(serde_json::from_value(Value::Object(row))?);
        }
        Ok(rows)
    }
}

impl RowParser for CsvRows {
    fn extensions(&self) -> &[&str] {
        &["csv"]
    }

    fn parse_goals(&self, text: &str) -> Result<Vec<Goal>, RowError> {
        Self::rows(text)
    }

    fn parse_programs(&self, text: &str) -> Result<Vec<Program>, RowError> {
        Self::rows(text)
    }
}

/// Parsers by extension, first registered wins
pub struct ParserRegistry {
    parsers: Vec<Box<dyn RowParser>>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        default_parsers()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("extensions", &self.all_extensions())
            .finish()
    }
}

impl ParserRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Register a parser
    pub fn register<P: RowParser>(&mut self, parser: P) {
        self.parsers.push(Box::new(parser));
    }

    /// Find parser for path
    #[must_use]
    pub fn find_for_path(&self, path: &Path) -> Option<&dyn RowParser> {
        self.parsers
            .iter()
            .find(|p| p.can_parse(path))
            .map(|p| p.as_ref())
    }

    /// All registered extensions
    #[must_use]
    pub fn all_extensions(&self) -> Vec<&str> {
        self.parsers
            .iter()
            .flat_map(|p| p.extensions().iter().copied())
            .collect()
    }
}

/// Registry with the JSON, YAML and CSV parsers
#[must_use]
pub fn default_parsers() -> ParserRegistry {
    let mut registry = ParserRegistry::new();
    registry.register(JsonRows);
    registry.register(YamlRows);
    registry.register(CsvRows);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_parser_by_extension() {
        let registry = default_parsers();

        assert!(registry.find_for_path(Path::new("goals.json")).is_some());
        assert!(registry.find_for_path(Path::new("goals.YML")).is_some());
        assert!(registry.find_for_path(Path::new("programs.yaml")).is_some());
        assert!(registry.find_for_path(Path::new("programs.CSV")).is_some());
        assert!(registry.find_for_path(Path::new("programs.xlsx")).is_none());
        assert!(registry.find_for_path(Path::new("programs")).is_none());
    }

    #[test]
    fn json_rows_decode() {
        let goals = JsonRows
            .parse_goals(r#"[{"ID": "G-01", "Name": "Basic Computation", "Grade": "K"}]"#)
            .unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].grade(), Some("K"));
    }

    #[test]
    fn yaml_rows_decode() {
        let yaml = "- Program_Name: Math Club\n  Goals_Covered: G-06, G-08\n  Rigor: High\n";
        let programs = YamlRows.parse_programs(yaml).unwrap();
        assert_eq!(programs[0].name(), "Math Club");
        assert_eq!(programs[0].rigor(), Some("High"));
    }

    #[test]
    fn empty_yaml_is_empty_table() {
        assert!(YamlRows.parse_goals("").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = JsonRows.parse_goals(r#"{"ID": "G-01"}"#).unwrap_err();
        assert!(matches!(err, RowError::Json(_)));
    }

    #[test]
    fn csv_rows_decode_with_quoted_refs() {
        let csv = "Program_Name,Goals_Covered,Rigor,Funding\n\
                   Math Club,\"G-06, G-08\",High,Grant\n\
                   ,,,\n\
                   Science Camp,G-05,,\n";
        let programs = CsvRows.parse_programs(csv).unwrap();

        assert_eq!(programs.len(), 2);
        assert_eq!(programs[0].goal_refs().collect::<Vec<_>>(), vec!["G-06", "G-08"]);
        assert_eq!(programs[0].extra().get("Funding").map(String::as_str), Some("Grant"));
        assert_eq!(programs[1].rigor(), None);
        assert!(!programs[1].extra().contains_key("Funding"));
    }

    #[test]
    fn csv_goals_without_grade_column() {
        let goals = CsvRows
            .parse_goals("\u{feff}ID, Name\nG-01,Basic Computation\nG-02,Phonological Awareness\n")
            .unwrap();
        assert_eq!(goals[1].id(), "G-02");
        assert_eq!(goals[1].name(), "Phonological Awareness");
        assert_eq!(goals[0].grade(), None);
    }

    #[test]
    fn csv_row_without_id_is_an_error() {
        let err = CsvRows.parse_goals("ID,Name\n,Orphan\n").unwrap_err();
        assert!(matches!(err, RowError::Json(_)));
    }

    #[test]
    fn ragged_csv_is_an_error() {
        let err = CsvRows.parse_goals("ID,Name\nG-01,A,extra\n").unwrap_err();
        assert!(matches!(err, RowError::Csv(_)));
    }

    #[test]
    fn lists_extensions() {
        assert_eq!(default_parsers().all_extensions(), vec!["json", "yaml", "yml", "csv"]);
    }
}

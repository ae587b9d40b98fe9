//! Data sources
//!
//! A [`DataSource`] yields a complete [`Dataset`] or an error, never a
//! partially loaded one.

use crate::error::LoadError;
use crate::parsers::{default_parsers, ParserRegistry, Row};
use crate::sample::{sample_goals, sample_programs};
use async_trait::async_trait;
use covmat_model::{Dataset, Goal, Program};
use std::path::{Path, PathBuf};

/// Largest table accepted by default (10MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Origin of the goal and program tables
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Load both tables and assemble the dataset
    ///
    /// # Errors
    /// Returns [`LoadError`] if either table fails to load or decode, or if
    /// the goals do not form a valid universe.
    async fn load(&self) -> Result<Dataset, LoadError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Tables read from two files on disk
#[derive(Debug)]
pub struct FileSource {
    goals_path: PathBuf,
    programs_path: PathBuf,
    parsers: ParserRegistry,
    max_file_size: u64,
}

impl FileSource {
    /// Create source with the default parsers and size limit
    #[must_use]
    pub fn new(goals_path: impl Into<PathBuf>, programs_path: impl Into<PathBuf>) -> Self {
        Self {
            goals_path: goals_path.into(),
            programs_path: programs_path.into(),
            parsers: default_parsers(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// With custom parser registry
    #[must_use]
    pub fn with_parsers(mut self, parsers: ParserRegistry) -> Self {
        self.parsers = parsers;
        self
    }

    /// With size limit in bytes
    #[must_use]
    pub fn with_max_file_size(mut self, max: u64) -> Self {
        self.max_file_size = max;
        self
    }

    /// Framework table path
    #[inline]
    #[must_use]
    pub fn goals_path(&self) -> &Path {
        &self.goals_path
    }

    /// Program table path
    #[inline]
    #[must_use]
    pub fn programs_path(&self) -> &Path {
        &self.programs_path
    }

    async fn read_table<T: Row>(&self, path: &Path) -> Result<Vec<T>, LoadError> {
        let parser = self
            .parsers
            .find_for_path(path)
            .ok_or_else(|| LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| LoadError::io_error(path, e))?;
        if metadata.len() > self.max_file_size {
            return Err(LoadError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max: self.max_file_size,
            });
        }

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadError::io_error(path, e))?;

        let rows = T::decode(parser, &text).map_err(|e| LoadError::parse_error(path, e))?;
        tracing::debug!("Read {} {} rows from {}", rows.len(), T::TABLE, path.display());
        Ok(rows)
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn load(&self) -> Result<Dataset, LoadError> {
        let (goals, programs) = tokio::try_join!(
            self.read_table::<Goal>(&self.goals_path),
            self.read_table::<Program>(&self.programs_path),
        )?;

        let dataset = Dataset::new(goals, programs)?;
        tracing::info!(
            "Loaded {} goals and {} programs from {}",
            dataset.goals().len(),
            dataset.programs().len(),
            self.describe()
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        format!(
            "{} + {}",
            self.goals_path.display(),
            self.programs_path.display()
        )
    }
}

/// Tables supplied directly, with no file access
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    goals: Vec<Goal>,
    programs: Vec<Program>,
}

impl InMemorySource {
    /// Wrap already materialized rows
    #[inline]
    #[must_use]
    pub fn new(goals: Vec<Goal>, programs: Vec<Program>) -> Self {
        Self { goals, programs }
    }

    /// The built-in demo tables
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_goals(), sample_programs())
    }
}

#[async_trait]
impl DataSource for InMemorySource {
    async fn load(&self) -> Result<Dataset, LoadError> {
        Ok(Dataset::new(self.goals.clone(), self.programs.clone())?)
    }

    fn describe(&self) -> String {
        format!(
            "in-memory ({} goals, {} programs)",
            self.goals.len(),
            self.programs.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covmat_model::ModelError;

    #[tokio::test]
    async fn sample_source_loads() {
        let dataset = InMemorySource::sample().load().await.unwrap();
        assert_eq!(dataset.goals().len(), 10);
        assert_eq!(dataset.programs().len(), 6);
        assert_eq!(dataset.goal("G-07").map(Goal::name), Some("Essay Structure"));
    }

    #[tokio::test]
    async fn in_memory_source_validates_goals() {
        let source = InMemorySource::new(
            vec![Goal::new("G-01", "A"), Goal::new("G-01", "B")],
            vec![],
        );
        let err = source.load().await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Model(ModelError::DuplicateGoalId { .. })
        ));
    }

    #[test]
    fn describes_paths() {
        let source = FileSource::new("goals.json", "programs.yaml");
        assert_eq!(source.describe(), "goals.json + programs.yaml");
        assert_eq!(source.goals_path(), Path::new("goals.json"));
    }
}

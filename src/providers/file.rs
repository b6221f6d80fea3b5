use super::ScheduleProvider;
use crate::errors::{AppError, AppResult};
use crate::models::WeeklySchedule;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Weekly schedule stored on disk as YAML, or JSON when the file ends in `.json`.
#[derive(Debug, Clone)]
pub struct FileScheduleProvider {
    path: PathBuf,
}

impl FileScheduleProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AppResult<WeeklySchedule> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::InvalidSchedule(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let is_json = self
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let schedule = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        debug!(path = %self.path.display(), "loaded weekly schedule");
        Ok(schedule)
    }
}

#[async_trait]
impl ScheduleProvider for FileScheduleProvider {
    async fn fetch(&self) -> AppResult<WeeklySchedule> {
        self.load()
    }
}

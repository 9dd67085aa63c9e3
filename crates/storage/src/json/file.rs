use async_trait::async_trait;
use quiz_core::model::Person;
use std::path::PathBuf;

use super::parse_roster;
use crate::repository::{RosterSource, StorageError};

/// Roster read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileRoster {
    path: PathBuf,
}

impl JsonFileRoster {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RosterSource for JsonFileRoster {
    async fn load(&self) -> Result<Vec<Person>, StorageError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StorageError::Unreachable(format!("{}: {e}", self.path.display())))?;
        let people = parse_roster(&bytes)?;
        tracing::debug!(path = %self.path.display(), count = people.len(), "roster file parsed");
        Ok(people)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

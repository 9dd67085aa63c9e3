use async_trait::async_trait;
use quiz_core::model::Person;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

use crate::json::{HttpRoster, JsonFileRoster};

/// Errors surfaced by roster sources and photo scanning.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("roster source unreachable: {0}")]
    Unreachable(String),

    #[error("roster is not valid JSON: {0}")]
    Serialization(String),

    #[error("roster payload is not a list")]
    NotASequence,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Contract for anything that can hand over the quiz roster.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Load every person from the source.
    ///
    /// Individual records are not validated; only an unreachable source or a
    /// payload that is not a JSON array is an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or parsed.
    async fn load(&self) -> Result<Vec<Person>, StorageError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Simple in-memory roster for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRoster {
    people: Arc<Vec<Person>>,
}

impl InMemoryRoster {
    #[must_use]
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people: Arc::new(people),
        }
    }
}

#[async_trait]
impl RosterSource for InMemoryRoster {
    async fn load(&self) -> Result<Vec<Person>, StorageError> {
        Ok(self.people.as_ref().clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} people)", self.people.len())
    }
}

/// Roster source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub roster: Arc<dyn RosterSource>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(people: Vec<Person>) -> Self {
        Self {
            roster: Arc::new(InMemoryRoster::new(people)),
        }
    }

    /// Pick a source for `location`: `http(s)` URLs are fetched, anything else
    /// is read as a file path.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        let roster: Arc<dyn RosterSource> = match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Arc::new(HttpRoster::new(url)),
            _ => Arc::new(JsonFileRoster::new(location)),
        };
        Self { roster }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_round_trips_people() {
        let storage = Storage::in_memory(vec![Person::new("Jane Doe", "math", "a.jpg")]);
        let people = storage.roster.load().await.unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name(), Some("Jane Doe"));
        assert_eq!(storage.roster.describe(), "memory (1 people)");
    }

    #[test]
    fn from_location_picks_backend_by_scheme() {
        let http = Storage::from_location("https://example.org/data/people.json");
        assert!(http.roster.describe().starts_with("https://"));

        let file = Storage::from_location("data/people.json");
        assert_eq!(file.roster.describe(), "data/people.json");

        let windows_like = Storage::from_location("C:/quiz/people.json");
        assert_eq!(windows_like.roster.describe(), "C:/quiz/people.json");
    }
}

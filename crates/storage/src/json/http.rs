use async_trait::async_trait;
use quiz_core::model::Person;
use url::Url;

use super::parse_roster;
use crate::repository::{RosterSource, StorageError};

/// Roster fetched over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpRoster {
    url: Url,
    client: reqwest::Client,
}

impl HttpRoster {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RosterSource for HttpRoster {
    async fn load(&self) -> Result<Vec<Person>, StorageError> {
        let unreachable = |e: reqwest::Error| StorageError::Unreachable(format!("{}: {e}", self.url));
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(unreachable)?
            .error_for_status()
            .map_err(unreachable)?;
        let bytes = response.bytes().await.map_err(unreachable)?;
        let people = parse_roster(&bytes)?;
        tracing::debug!(url = %self.url, count = people.len(), "roster fetched");
        Ok(people)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

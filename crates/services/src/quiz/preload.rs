//! Background fetching of the image the quiz is likely to show next.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use url::Url;

use quiz_core::model::PersonId;

use crate::error::PrefetchError;

/// Entry following `current` in `filtered`, wrapping at the end.
///
/// Returns `None` when `current` is not in the list or is its own
/// successor.
#[must_use]
pub fn successor(filtered: &[PersonId], current: PersonId) -> Option<PersonId> {
    let position = filtered.iter().position(|id| *id == current)?;
    let next = filtered[(position + 1) % filtered.len()];
    (next != current).then_some(next)
}

//
// ─── PREFETCHERS ───────────────────────────────────────────────────────────────
//

/// Something that can warm a cache for an image location.
#[async_trait]
pub trait Prefetcher: Send + Sync {
    /// Fetch `location` and discard the bytes.
    ///
    /// # Errors
    ///
    /// Returns `PrefetchError` if the resource cannot be read.
    async fn prefetch(&self, location: &str) -> Result<(), PrefetchError>;
}

/// Reads images relative to a directory on disk.
#[derive(Debug, Clone)]
pub struct FilePrefetcher {
    root: PathBuf,
}

impl FilePrefetcher {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Prefetcher for FilePrefetcher {
    async fn prefetch(&self, location: &str) -> Result<(), PrefetchError> {
        tokio::fs::read(self.root.join(location)).await?;
        Ok(())
    }
}

/// GETs absolute `http(s)` image URLs.
#[derive(Debug, Clone, Default)]
pub struct HttpPrefetcher {
    client: reqwest::Client,
}

impl HttpPrefetcher {
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn fetch(&self, url: Url) -> Result<(), PrefetchError> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Prefetcher for HttpPrefetcher {
    async fn prefetch(&self, location: &str) -> Result<(), PrefetchError> {
        self.fetch(Url::parse(location)?).await
    }
}

/// Where relative image paths in the roster are resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetBase {
    Dir(PathBuf),
    Url(Url),
}

/// Routes each location to the file or HTTP prefetcher.
///
/// Absolute `http(s)` URLs always go over HTTP. Relative paths are joined to
/// the asset base: a directory reads from disk, a URL base fetches over HTTP.
#[derive(Debug, Clone)]
pub struct RoutingPrefetcher {
    base: AssetBase,
    file: FilePrefetcher,
    http: HttpPrefetcher,
}

impl RoutingPrefetcher {
    #[must_use]
    pub fn new(base: AssetBase) -> Self {
        let root = match &base {
            AssetBase::Dir(dir) => dir.clone(),
            AssetBase::Url(_) => PathBuf::new(),
        };
        Self {
            base,
            file: FilePrefetcher::new(root),
            http: HttpPrefetcher::default(),
        }
    }
}

#[async_trait]
impl Prefetcher for RoutingPrefetcher {
    async fn prefetch(&self, location: &str) -> Result<(), PrefetchError> {
        if let Ok(url) = Url::parse(location) {
            if matches!(url.scheme(), "http" | "https") {
                return self.http.fetch(url).await;
            }
        }
        match &self.base {
            AssetBase::Dir(_) => self.file.prefetch(location).await,
            AssetBase::Url(base) => self.http.fetch(base.join(location)?).await,
        }
    }
}

//
// ─── PRELOADER ─────────────────────────────────────────────────────────────────
//

/// Fire-and-forget image preloading that never requests a location twice.
///
/// A location is remembered once requested. If the fetch fails it is
/// forgotten again so a later question can retry it.
#[derive(Clone)]
pub struct Preloader {
    fetcher: Arc<dyn Prefetcher>,
    requested: Arc<Mutex<HashSet<String>>>,
}

impl Preloader {
    #[must_use]
    pub fn new(fetcher: Arc<dyn Prefetcher>) -> Self {
        Self {
            fetcher,
            requested: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Start fetching `location` in the background.
    ///
    /// Returns `false` without spawning when the location was already
    /// fetched or is in flight. Must be called inside a tokio runtime.
    pub fn preload(&self, location: &str) -> bool {
        if !self.remember(location) {
            return false;
        }

        let fetcher = Arc::clone(&self.fetcher);
        let requested = Arc::clone(&self.requested);
        let location = location.to_owned();
        tokio::spawn(async move {
            match fetcher.prefetch(&location).await {
                Ok(()) => tracing::debug!(%location, "image preloaded"),
                Err(err) => {
                    tracing::debug!(%location, error = %err, "image preload failed");
                    if let Ok(mut set) = requested.lock() {
                        set.remove(&location);
                    }
                }
            }
        });
        true
    }

    /// Whether `location` has been requested and not forgotten.
    #[must_use]
    pub fn is_requested(&self, location: &str) -> bool {
        self.requested
            .lock()
            .map(|set| set.contains(location))
            .unwrap_or(false)
    }

    fn remember(&self, location: &str) -> bool {
        match self.requested.lock() {
            Ok(mut set) => set.insert(location.to_owned()),
            Err(_) => false,
        }
    }
}

impl std::fmt::Debug for Preloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preloader").finish_non_exhaustive()
    }
}

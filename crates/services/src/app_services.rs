use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

use quiz_core::model::{QuizSettings, Roster};
use storage::Storage;

use crate::error::AppServicesError;
use crate::photo_service::RandomPhotoService;
use crate::quiz::{AssetBase, Preloader, QuizHandle, QuizLoop, QuizSession, RoutingPrefetcher};

/// Default roster location.
pub const DEFAULT_DATA_LOCATION: &str = "data/people.json";

/// Default root of the random photo tree.
pub const DEFAULT_PHOTOS_ROOT: &str = "FACES";

/// Everything needed to assemble the app services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub data_location: String,
    pub settings: QuizSettings,
    pub photos_root: PathBuf,
    pub asset_base: AssetBase,
}

impl ServiceConfig {
    /// Build a config, validating the quiz settings.
    ///
    /// Relative image paths resolve against the roster URL when the roster
    /// is fetched over HTTP, and against the working directory otherwise.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Settings` if `auto_advance_ms` is out of
    /// range.
    pub fn new(
        data_location: impl Into<String>,
        auto_advance_ms: u32,
        preload: bool,
    ) -> Result<Self, AppServicesError> {
        let data_location = data_location.into();
        let asset_base = match Url::parse(&data_location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => AssetBase::Url(url),
            _ => AssetBase::Dir(PathBuf::from(".")),
        };
        Ok(Self {
            data_location,
            settings: QuizSettings::new(auto_advance_ms, preload)?,
            photos_root: PathBuf::from(DEFAULT_PHOTOS_ROOT),
            asset_base,
        })
    }

    #[must_use]
    pub fn with_photos_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.photos_root = root.into();
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_location: DEFAULT_DATA_LOCATION.to_owned(),
            settings: QuizSettings::default(),
            photos_root: PathBuf::from(DEFAULT_PHOTOS_ROOT),
            asset_base: AssetBase::Dir(PathBuf::from(".")),
        }
    }
}

/// Load the roster from `location` (file path or `http(s)` URL).
///
/// # Errors
///
/// Returns `AppServicesError::Data` if the source is unreachable or not a
/// JSON array.
pub async fn load_roster(location: &str) -> Result<Roster, AppServicesError> {
    let storage = Storage::from_location(location);
    let people = storage.roster.load().await?;
    tracing::info!(
        source = %storage.roster.describe(),
        people = people.len(),
        "roster loaded"
    );
    Ok(Roster::new(people))
}

/// Assembles app-facing services: the running quiz and the photo picker.
#[derive(Clone, Debug)]
pub struct AppServices {
    quiz: QuizHandle,
    departments: Vec<String>,
    photos: Arc<RandomPhotoService>,
}

impl AppServices {
    /// Load the roster and start the quiz loop on the current runtime.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Data` if the roster cannot be loaded.
    pub async fn load(config: ServiceConfig) -> Result<Self, AppServicesError> {
        let roster = load_roster(&config.data_location).await?;
        Ok(Self::from_roster(roster, config))
    }

    /// Start services over an already loaded roster.
    ///
    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn from_roster(roster: Roster, config: ServiceConfig) -> Self {
        let session = QuizSession::new(roster, config.settings);
        let departments = session.departments().to_vec();
        let preloader = Preloader::new(Arc::new(RoutingPrefetcher::new(config.asset_base)));
        let (quiz_loop, quiz) = QuizLoop::new(session, Some(preloader));
        quiz_loop.spawn();

        Self {
            quiz,
            departments,
            photos: Arc::new(RandomPhotoService::new(config.photos_root)),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> QuizHandle {
        self.quiz.clone()
    }

    #[must_use]
    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    #[must_use]
    pub fn photos(&self) -> Arc<RandomPhotoService> {
        Arc::clone(&self.photos)
    }
}

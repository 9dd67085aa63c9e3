use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use storage::photos::{PHOTO_EXTENSIONS, department_dirs, display_name_from_path, photo_files};

use crate::error::PhotoError;

/// One randomly chosen photo, serialized as `{personName, randomPhoto}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomPhoto {
    pub person_name: String,
    pub random_photo: String,
}

/// Picks a random photo from a `<root>/<Department>/<photo>` tree.
///
/// The department is drawn first and the photo second, so every department
/// is equally likely regardless of how many photos it holds.
pub struct RandomPhotoService {
    root: PathBuf,
    rng: Mutex<StdRng>,
}

impl RandomPhotoService {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_rng(root, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_rng(root: impl Into<PathBuf>, rng: StdRng) -> Self {
        Self {
            root: root.into(),
            rng: Mutex::new(rng),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Pick a department directory, then a photo inside it.
    ///
    /// # Errors
    ///
    /// Returns `PhotoError::NoDepartments` if the root has no
    /// sub-directories, `PhotoError::NoPhotos` if the chosen one holds no
    /// photo, or `PhotoError::Storage` if a directory cannot be read.
    pub fn pick(&self) -> Result<RandomPhoto, PhotoError> {
        let departments = department_dirs(&self.root)?;
        if departments.is_empty() {
            return Err(PhotoError::NoDepartments(self.root.display().to_string()));
        }
        let department = &departments[self.draw(departments.len())];

        let photos = photo_files(department, PHOTO_EXTENSIONS)?;
        if photos.is_empty() {
            return Err(PhotoError::NoPhotos(department.display().to_string()));
        }
        let photo = &photos[self.draw(photos.len())];

        tracing::debug!(photo = %photo.display(), "random photo picked");
        Ok(RandomPhoto {
            person_name: display_name_from_path(photo),
            random_photo: photo.to_string_lossy().into_owned(),
        })
    }

    /// Run `pick` on the blocking thread pool so directory scans stay off
    /// the calling executor.
    ///
    /// # Errors
    ///
    /// Same as `pick`, plus `PhotoError::Scan` if the scan task panicked.
    pub async fn pick_async(self: Arc<Self>) -> Result<RandomPhoto, PhotoError> {
        tokio::task::spawn_blocking(move || self.pick()).await?
    }

    fn draw(&self, len: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.random_range(0..len),
            Err(poisoned) => poisoned.into_inner().random_range(0..len),
        }
    }
}

impl std::fmt::Debug for RandomPhotoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomPhotoService")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

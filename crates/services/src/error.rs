//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SettingsError;
use storage::StorageError;

use crate::quiz::{QuestionTicket, QuizPhase};

/// Errors emitted by the quiz session and its driver loop.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no people found in {department}")]
    EmptyFilter { department: String },
    #[error("{operation} is not accepted while {phase:?}")]
    NotAccepting {
        operation: &'static str,
        phase: QuizPhase,
    },
    #[error("question {0} is no longer current")]
    StaleTicket(QuestionTicket),
    #[error("current person is missing from the roster")]
    MissingPerson,
    #[error("quiz loop has stopped")]
    Closed,
}

impl QuizError {
    /// Rejections that are part of normal play rather than faults.
    #[must_use]
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            Self::EmptyFilter { .. } | Self::NotAccepting { .. } | Self::StaleTicket(_)
        )
    }
}

/// Errors emitted while prefetching an image.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrefetchError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

/// Errors emitted by `RandomPhotoService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PhotoError {
    #[error("no department directories under {0}")]
    NoDepartments(String),
    #[error("no photos in {0}")]
    NoPhotos(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("photo scan did not finish: {0}")]
    Scan(#[from] tokio::task::JoinError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("failed to load quiz data: {0}")]
    Data(#[from] StorageError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("auto advance delay must be between 100 and 10000 ms (got {0})")]
    InvalidAutoAdvance(u32),
}

/// Tunables for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    auto_advance_ms: u32,
    preload: bool,
}

impl QuizSettings {
    pub const DEFAULT_AUTO_ADVANCE_MS: u32 = 1_500;

    /// Creates custom quiz settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidAutoAdvance` if the delay is outside 100..=10000 ms.
    pub fn new(auto_advance_ms: u32, preload: bool) -> Result<Self, SettingsError> {
        if !(100..=10_000).contains(&auto_advance_ms) {
            return Err(SettingsError::InvalidAutoAdvance(auto_advance_ms));
        }
        Ok(Self {
            auto_advance_ms,
            preload,
        })
    }

    /// How long success feedback stays up before the next question.
    #[must_use]
    pub fn auto_advance_ms(&self) -> u32 {
        self.auto_advance_ms
    }

    #[must_use]
    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(u64::from(self.auto_advance_ms))
    }

    /// When true, the next candidate's image is fetched in the background.
    #[must_use]
    pub fn preload(&self) -> bool {
        self.preload
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            auto_advance_ms: Self::DEFAULT_AUTO_ADVANCE_MS,
            preload: true,
        }
    }
}

use serde::Serialize;

use super::QuestionTicket;

/// Where the question lifecycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    /// No person can be shown: the filtered roster is empty (or the quiz has
    /// not started yet).
    Idle,
    /// A person is shown and guesses are accepted.
    Presenting,
    /// A correct guess is being celebrated; the next question follows after
    /// the auto-advance delay.
    Advancing,
    /// The answer was revealed after a wrong guess or a skip.
    AnswerShown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    #[default]
    Neutral,
    Success,
    Error,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Feedback {
    pub status: FeedbackStatus,
    pub text: String,
}

impl Feedback {
    #[must_use]
    pub fn neutral(text: impl Into<String>) -> Self {
        Self {
            status: FeedbackStatus::Neutral,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            status: FeedbackStatus::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            status: FeedbackStatus::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn skip(text: impl Into<String>) -> Self {
        Self {
            status: FeedbackStatus::Skip,
            text: text.into(),
        }
    }
}

/// The photo slot. `src` is `None` when nothing should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ImageView {
    pub src: Option<String>,
    pub alt: String,
}

/// The correct answer, only present once revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reveal {
    pub name: String,
    pub department: String,
}

/// Everything a presentation adapter needs to render the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSnapshot {
    pub phase: QuizPhase,
    pub ticket: QuestionTicket,
    pub image: ImageView,
    pub reveal: Option<Reveal>,
    pub feedback: Feedback,
    pub score: u32,
    pub streak: u32,
    pub departments: Vec<String>,
    pub selected_department: String,
}

impl QuizSnapshot {
    #[must_use]
    pub fn guess_enabled(&self) -> bool {
        self.phase == QuizPhase::Presenting
    }

    #[must_use]
    pub fn can_skip(&self) -> bool {
        self.phase == QuizPhase::Presenting
    }

    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.phase == QuizPhase::AnswerShown
    }
}

use serde::Serialize;
use std::fmt;

/// Identifies one presented question. Bumped on every `next`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct QuestionTicket(u64);

impl QuestionTicket {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Debug for QuestionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionTicket({})", self.0)
    }
}

impl fmt::Display for QuestionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Input forwarded by a presentation adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCommand {
    SubmitGuess(String),
    Skip,
    Continue,
    ChangeFilter(String),
    /// The image shown for the given question failed to load.
    ImageFailed(QuestionTicket),
}

/// Everything the quiz loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum QuizEvent {
    Start,
    Command(QuizCommand),
    AutoAdvance(QuestionTicket),
}

impl QuizEvent {
    /// Feedback shown when handling this event fails unexpectedly.
    pub(crate) fn fault_message(&self) -> &'static str {
        match self {
            Self::Command(QuizCommand::SubmitGuess(_)) => "Error checking answer",
            _ => "Error loading next question",
        }
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Duration;

use quiz_core::matching::is_correct_guess;
use quiz_core::model::{DepartmentFilter, Person, PersonId, QuizSettings, Roster};

use super::preload::successor;
use super::{Feedback, ImageView, QuestionTicket, QuizPhase, QuizSnapshot, Reveal};
use crate::error::QuizError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of a guess that was accepted for checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Score and streak were bumped; the session should move on to the next
    /// question once `after` has elapsed, unless `ticket` is superseded first.
    Correct {
        ticket: QuestionTicket,
        after: Duration,
    },
    /// Streak was reset and the answer revealed.
    Incorrect,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Owned state of one quiz: roster, filter, current question, score and
/// streak.
///
/// Every operation checks that it is allowed in the current phase before
/// touching anything, so a rejected call leaves the session exactly as it
/// was.
pub struct QuizSession {
    roster: Roster,
    departments: Vec<String>,
    settings: QuizSettings,
    filter: DepartmentFilter,
    phase: QuizPhase,
    current: Option<PersonId>,
    ticket: QuestionTicket,
    score: u32,
    streak: u32,
    feedback: Feedback,
    image: ImageView,
    rng: StdRng,
}

impl QuizSession {
    /// Create a session over `roster`. No question is shown until `start`.
    #[must_use]
    pub fn new(roster: Roster, settings: QuizSettings) -> Self {
        let departments = roster.departments();
        Self {
            roster,
            departments,
            settings,
            filter: DepartmentFilter::All,
            phase: QuizPhase::Idle,
            current: None,
            ticket: QuestionTicket::default(),
            score: 0,
            streak: 0,
            feedback: Feedback::default(),
            image: ImageView::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a specific random source, e.g. a seeded one in tests.
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    // Accessors
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn filter(&self) -> &DepartmentFilter {
        &self.filter
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn current(&self) -> Option<PersonId> {
        self.current
    }

    #[must_use]
    pub fn current_person(&self) -> Option<&Person> {
        self.current.and_then(|id| self.roster.get(id))
    }

    #[must_use]
    pub fn ticket(&self) -> QuestionTicket {
        self.ticket
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Start the quiz by presenting the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyFilter` when nobody matches the filter; the
    /// session is then `Idle`.
    pub fn start(&mut self) -> Result<PersonId, QuizError> {
        self.next()
    }

    /// Present a uniformly random person from the filtered roster.
    ///
    /// Allowed from any phase. Repeats are possible: each pick is
    /// independent of the previous one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyFilter` when nobody matches the filter; the
    /// session is then `Idle` with the image cleared.
    pub fn next(&mut self) -> Result<PersonId, QuizError> {
        let candidates = self.roster.filter(&self.filter);
        if candidates.is_empty() {
            self.ticket = self.ticket.next();
            self.phase = QuizPhase::Idle;
            self.current = None;
            self.image = ImageView::default();
            self.feedback = Feedback::neutral(format!("No people found in {}", self.filter));
            return Err(QuizError::EmptyFilter {
                department: self.filter.label().to_owned(),
            });
        }

        let id = candidates[self.rng.random_range(0..candidates.len())];
        let person = self.roster.get(id).ok_or(QuizError::MissingPerson)?;
        self.ticket = self.ticket.next();
        self.image = match person.image() {
            Some(src) => ImageView {
                src: Some(src.to_owned()),
                alt: person.name().unwrap_or("Person image").to_owned(),
            },
            None => ImageView {
                src: None,
                alt: "Image not available".to_owned(),
            },
        };
        self.current = Some(id);
        self.phase = QuizPhase::Presenting;
        self.feedback = Feedback::default();
        Ok(id)
    }

    /// Check a typed guess against the current person.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAccepting` outside `Presenting` and
    /// `QuizError::MissingPerson` if the current person cannot be resolved.
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, QuizError> {
        self.expect_phase("submit_guess", QuizPhase::Presenting)?;
        let person = self.current_person().ok_or(QuizError::MissingPerson)?;
        let correct = is_correct_guess(person, guess);
        let reveal = reveal_for(person);

        if correct {
            self.score = self.score.saturating_add(1);
            self.streak = self.streak.saturating_add(1);
            self.feedback = Feedback::success(format!(
                "✅ Correct! It's {} from {}.",
                reveal.name, reveal.department
            ));
            self.phase = QuizPhase::Advancing;
            Ok(GuessOutcome::Correct {
                ticket: self.ticket,
                after: self.settings.auto_advance(),
            })
        } else {
            self.streak = 0;
            self.feedback = Feedback::error("❌ Incorrect");
            self.phase = QuizPhase::AnswerShown;
            Ok(GuessOutcome::Incorrect)
        }
    }

    /// Give up on the current person and reveal the answer.
    ///
    /// The score is kept; a skip ends the current streak.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAccepting` outside `Presenting`.
    pub fn skip(&mut self) -> Result<(), QuizError> {
        self.expect_phase("skip", QuizPhase::Presenting)?;
        if self.current_person().is_none() {
            return Err(QuizError::MissingPerson);
        }
        self.streak = 0;
        self.feedback = Feedback::skip("⏭ Skipped");
        self.phase = QuizPhase::AnswerShown;
        Ok(())
    }

    /// Leave the revealed answer and move to the next question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAccepting` outside `AnswerShown`, or
    /// `QuizError::EmptyFilter` from `next`.
    pub fn continue_quiz(&mut self) -> Result<PersonId, QuizError> {
        self.expect_phase("continue", QuizPhase::AnswerShown)?;
        self.next()
    }

    /// Switch department filter and present a new question.
    ///
    /// Score and streak carry over. The current question is dropped even if
    /// it was still being answered.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyFilter` if the new filter matches nobody.
    pub fn change_filter(&mut self, label: &str) -> Result<PersonId, QuizError> {
        self.filter = DepartmentFilter::parse(label);
        self.next()
    }

    /// Move on after a correct answer, unless the question was superseded.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::StaleTicket` if `ticket` is not the current
    /// question or the session is no longer celebrating it.
    pub fn auto_advance(&mut self, ticket: QuestionTicket) -> Result<PersonId, QuizError> {
        if ticket != self.ticket || self.phase != QuizPhase::Advancing {
            return Err(QuizError::StaleTicket(ticket));
        }
        self.next()
    }

    /// Record that the displayed image could not be loaded.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::StaleTicket` if the report is for an older question.
    pub fn image_failed(&mut self, ticket: QuestionTicket) -> Result<(), QuizError> {
        if ticket != self.ticket || self.current.is_none() {
            return Err(QuizError::StaleTicket(ticket));
        }
        self.image = ImageView {
            src: None,
            alt: "Image failed to load".to_owned(),
        };
        Ok(())
    }

    /// Replace the feedback line after an unexpected failure.
    pub fn report_fault(&mut self, message: &str) {
        self.feedback = Feedback::error(message);
    }

    /// Image of the entry following the current person in the filtered
    /// roster, if it is worth fetching ahead of time.
    #[must_use]
    pub fn preload_target(&self) -> Option<&str> {
        if self.roster.len() < 2 {
            return None;
        }
        let current = self.current?;
        let next = successor(&self.roster.filter(&self.filter), current)?;
        self.roster.get(next)?.image()
    }

    /// Render-ready view of the session.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        let reveal = match self.phase {
            QuizPhase::AnswerShown => self.current_person().map(reveal_for),
            _ => None,
        };
        QuizSnapshot {
            phase: self.phase,
            ticket: self.ticket,
            image: self.image.clone(),
            reveal,
            feedback: self.feedback.clone(),
            score: self.score,
            streak: self.streak,
            departments: self.departments.clone(),
            selected_department: self.filter.label().to_owned(),
        }
    }

    fn expect_phase(&self, operation: &'static str, phase: QuizPhase) -> Result<(), QuizError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(QuizError::NotAccepting {
                operation,
                phase: self.phase,
            })
        }
    }
}

fn reveal_for(person: &Person) -> Reveal {
    Reveal {
        name: person.name().unwrap_or_default().to_owned(),
        department: person.normalized_department(),
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("roster_len", &self.roster.len())
            .field("filter", &self.filter)
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("ticket", &self.ticket)
            .field("score", &self.score)
            .field("streak", &self.streak)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

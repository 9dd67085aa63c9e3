use services::{FeedbackStatus, QuestionTicket, QuizCommand, QuizSnapshot};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepartmentOptionVm {
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealVm {
    pub name: String,
    pub department: String,
}

/// Render-ready form of a `QuizSnapshot`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub ticket: QuestionTicket,
    pub image_src: Option<String>,
    pub image_alt: String,
    pub feedback_text: String,
    pub feedback_class: &'static str,
    pub score_label: String,
    pub streak_label: String,
    pub reveal: Option<RevealVm>,
    pub guess_enabled: bool,
    pub can_skip: bool,
    pub can_continue: bool,
    pub departments: Vec<DepartmentOptionVm>,
    pub selected_department: String,
}

impl From<&QuizSnapshot> for QuizVm {
    fn from(snapshot: &QuizSnapshot) -> Self {
        let departments = snapshot
            .departments
            .iter()
            .map(|label| DepartmentOptionVm {
                label: label.clone(),
                selected: *label == snapshot.selected_department,
            })
            .collect();

        Self {
            ticket: snapshot.ticket,
            image_src: snapshot.image.src.clone(),
            image_alt: snapshot.image.alt.clone(),
            feedback_text: snapshot.feedback.text.clone(),
            feedback_class: feedback_class(snapshot.feedback.status),
            score_label: format!("Score: {}", snapshot.score),
            streak_label: format!("Streak: {} 🔥", snapshot.streak),
            reveal: snapshot.reveal.as_ref().map(|reveal| RevealVm {
                name: reveal.name.clone(),
                department: reveal.department.clone(),
            }),
            guess_enabled: snapshot.guess_enabled(),
            can_skip: snapshot.can_skip(),
            can_continue: snapshot.can_continue(),
            departments,
            selected_department: snapshot.selected_department.clone(),
        }
    }
}

#[must_use]
pub fn map_quiz_snapshot(snapshot: &QuizSnapshot) -> QuizVm {
    QuizVm::from(snapshot)
}

fn feedback_class(status: FeedbackStatus) -> &'static str {
    match status {
        FeedbackStatus::Neutral => "feedback",
        FeedbackStatus::Success => "feedback success",
        FeedbackStatus::Error => "feedback error",
        FeedbackStatus::Skip => "feedback skip",
    }
}

/// What the user did on the quiz page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Guess(String),
    Skip,
    Continue,
    ChangeDepartment(String),
    ImageFailed,
}

/// Translate an intent into a command, dropping ones the current view does
/// not offer.
#[must_use]
pub fn command_for(intent: QuizIntent, vm: &QuizVm) -> Option<QuizCommand> {
    match intent {
        QuizIntent::Guess(text) => vm.guess_enabled.then_some(QuizCommand::SubmitGuess(text)),
        QuizIntent::Skip => vm.can_skip.then_some(QuizCommand::Skip),
        QuizIntent::Continue => vm.can_continue.then_some(QuizCommand::Continue),
        QuizIntent::ChangeDepartment(label) => Some(QuizCommand::ChangeFilter(label)),
        QuizIntent::ImageFailed => Some(QuizCommand::ImageFailed(vm.ticket)),
    }
}

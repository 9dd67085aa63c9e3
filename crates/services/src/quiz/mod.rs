//! The quiz: session state machine, its event loop and image preloading.

mod driver;
mod events;
mod preload;
mod session;
mod view;

pub use driver::{QuizHandle, QuizLoop};
pub use events::{QuestionTicket, QuizCommand};
pub(crate) use events::QuizEvent;
pub use preload::{
    AssetBase, FilePrefetcher, HttpPrefetcher, Prefetcher, Preloader, RoutingPrefetcher,
    successor,
};
pub use session::{GuessOutcome, QuizSession};
pub use view::{Feedback, FeedbackStatus, ImageView, QuizPhase, QuizSnapshot, Reveal};

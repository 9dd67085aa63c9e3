use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::{
    Preloader, QuestionTicket, QuizCommand, QuizEvent, QuizPhase, QuizSession, QuizSnapshot,
};
use crate::error::QuizError;

#[derive(Debug, Clone, Copy)]
struct PendingAdvance {
    ticket: QuestionTicket,
    deadline: Instant,
}

/// Single task that owns a `QuizSession` and applies events to it in order.
///
/// After every event the new `QuizSnapshot` is published on a watch channel.
/// The auto-advance delay after a correct answer is a deadline raced against
/// incoming events; it is dropped as soon as the session leaves `Advancing`
/// or moves to another question.
pub struct QuizLoop {
    session: QuizSession,
    events: mpsc::UnboundedReceiver<QuizEvent>,
    snapshots: watch::Sender<QuizSnapshot>,
    preloader: Option<Preloader>,
    pending: Option<PendingAdvance>,
}

impl QuizLoop {
    /// Wrap `session` and return the handle adapters talk to.
    ///
    /// Preloading happens only when a preloader is given and the session
    /// settings allow it.
    #[must_use]
    pub fn new(session: QuizSession, preloader: Option<Preloader>) -> (Self, QuizHandle) {
        let (commands, events) = mpsc::unbounded_channel();
        let (snapshots, snapshot_rx) = watch::channel(session.snapshot());
        let preloader = preloader.filter(|_| session.settings().preload());

        let quiz_loop = Self {
            session,
            events,
            snapshots,
            preloader,
            pending: None,
        };
        let handle = QuizHandle {
            commands,
            snapshots: snapshot_rx,
        };
        (quiz_loop, handle)
    }

    /// Run the loop on the current tokio runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Present the first question, then process events until every handle
    /// is dropped.
    pub async fn run(mut self) {
        self.dispatch(QuizEvent::Start);

        loop {
            let event = match self.pending {
                Some(pending) => tokio::select! {
                    event = self.events.recv() => event,
                    () = tokio::time::sleep_until(pending.deadline) => {
                        Some(QuizEvent::AutoAdvance(pending.ticket))
                    }
                },
                None => self.events.recv().await,
            };

            let Some(event) = event else {
                break;
            };
            self.dispatch(event);
        }

        tracing::debug!(
            score = self.session.score(),
            streak = self.session.streak(),
            "quiz loop stopped"
        );
    }

    fn dispatch(&mut self, event: QuizEvent) {
        let before = self.session.ticket();
        let fault = event.fault_message();
        tracing::trace!(?event, ticket = %before, "quiz event");

        let result = match event {
            QuizEvent::Start => self.session.start().map(drop),
            QuizEvent::AutoAdvance(ticket) => self.session.auto_advance(ticket).map(drop),
            QuizEvent::Command(command) => self.apply(command),
        };

        if let Err(err) = result {
            match err {
                QuizError::EmptyFilter { .. } => tracing::info!(error = %err, "quiz idle"),
                _ if err.is_benign() => tracing::debug!(error = %err, "event rejected"),
                _ => {
                    tracing::warn!(error = %err, "quiz event failed");
                    self.session.report_fault(fault);
                }
            }
        }

        if self.session.ticket() != before {
            self.preload_next();
        }
        self.reconcile_timer();
        self.snapshots.send_replace(self.session.snapshot());
    }

    fn apply(&mut self, command: QuizCommand) -> Result<(), QuizError> {
        match command {
            QuizCommand::SubmitGuess(guess) => self.session.submit_guess(&guess).map(drop),
            QuizCommand::Skip => self.session.skip(),
            QuizCommand::Continue => self.session.continue_quiz().map(drop),
            QuizCommand::ChangeFilter(label) => self.session.change_filter(&label).map(drop),
            QuizCommand::ImageFailed(ticket) => self.session.image_failed(ticket),
        }
    }

    fn preload_next(&self) {
        let Some(preloader) = &self.preloader else {
            return;
        };
        if self.session.phase() != QuizPhase::Presenting {
            return;
        }
        if let Some(target) = self.session.preload_target() {
            preloader.preload(target);
        }
    }

    fn reconcile_timer(&mut self) {
        let ticket = self.session.ticket();
        if self.session.phase() != QuizPhase::Advancing {
            self.pending = None;
            return;
        }
        if self.pending.is_some_and(|pending| pending.ticket == ticket) {
            return;
        }
        self.pending = Some(PendingAdvance {
            ticket,
            deadline: Instant::now() + self.session.settings().auto_advance(),
        });
    }
}

/// Cloneable entry point for presentation adapters.
#[derive(Clone)]
pub struct QuizHandle {
    commands: mpsc::UnboundedSender<QuizEvent>,
    snapshots: watch::Receiver<QuizSnapshot>,
}

impl QuizHandle {
    /// Queue a command for the quiz loop.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Closed` if the loop has stopped.
    pub fn send(&self, command: QuizCommand) -> Result<(), QuizError> {
        self.commands
            .send(QuizEvent::Command(command))
            .map_err(|_| QuizError::Closed)
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that is notified on every published state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.snapshots.clone()
    }
}

impl std::fmt::Debug for QuizHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizHandle")
            .field("closed", &self.commands.is_closed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrefetchError;
    use crate::quiz::Prefetcher;
    use quiz_core::model::{Person, QuizSettings, Roster};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn start(people: Vec<Person>) -> (QuizHandle, JoinHandle<()>) {
        let session = QuizSession::new(Roster::new(people), QuizSettings::default())
            .with_rng(StdRng::seed_from_u64(3));
        let (quiz_loop, handle) = QuizLoop::new(session, None);
        (handle, quiz_loop.spawn())
    }

    fn solo() -> Vec<Person> {
        vec![Person::new("Jane Doe", "math", "a.jpg")]
    }

    async fn wait_for(
        rx: &mut watch::Receiver<QuizSnapshot>,
        pred: impl Fn(&QuizSnapshot) -> bool,
    ) -> QuizSnapshot {
        rx.wait_for(|snapshot| pred(snapshot)).await.unwrap().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn correct_guess_advances_after_delay() {
        let (handle, _task) = start(solo());
        let mut rx = handle.subscribe();
        let first = wait_for(&mut rx, |s| s.phase == QuizPhase::Presenting).await;

        handle.send(QuizCommand::SubmitGuess("jane".into())).unwrap();
        let advancing = wait_for(&mut rx, |s| s.phase == QuizPhase::Advancing).await;
        assert_eq!(advancing.ticket, first.ticket);
        assert_eq!((advancing.score, advancing.streak), (1, 1));
        assert!(!advancing.guess_enabled());

        let started = Instant::now();
        let next = wait_for(&mut rx, |s| s.ticket > first.ticket).await;
        assert!(started.elapsed() >= Duration::from_millis(1_500));
        assert_eq!(next.phase, QuizPhase::Presenting);
        assert_eq!(next.score, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn filter_change_supersedes_pending_advance() {
        let (handle, _task) = start(solo());
        let mut rx = handle.subscribe();
        wait_for(&mut rx, |s| s.phase == QuizPhase::Presenting).await;

        handle.send(QuizCommand::SubmitGuess("Jane Doe".into())).unwrap();
        let advancing = wait_for(&mut rx, |s| s.phase == QuizPhase::Advancing).await;

        handle.send(QuizCommand::ChangeFilter("Math".into())).unwrap();
        let changed = wait_for(&mut rx, |s| s.ticket > advancing.ticket).await;
        assert_eq!(changed.phase, QuizPhase::Presenting);

        tokio::time::sleep(Duration::from_secs(5)).await;
        let after = handle.snapshot();
        assert_eq!(after.ticket, changed.ticket);
        assert_eq!(after.phase, QuizPhase::Presenting);
        assert_eq!(after.score, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_advance_event_is_ignored() {
        let (handle, _task) = start(solo());
        let mut rx = handle.subscribe();
        let first = wait_for(&mut rx, |s| s.phase == QuizPhase::Presenting).await;

        handle.send(QuizCommand::Skip).unwrap();
        let shown = wait_for(&mut rx, |s| s.phase == QuizPhase::AnswerShown).await;
        assert!(shown.reveal.is_some());

        handle
            .commands
            .send(QuizEvent::AutoAdvance(first.ticket))
            .unwrap();
        handle.send(QuizCommand::Continue).unwrap();
        let next = wait_for(&mut rx, |s| s.phase == QuizPhase::Presenting).await;
        assert_eq!(next.ticket, QuestionTicket::new(first.ticket.value() + 1));
    }

    #[derive(Default)]
    struct RecordingPrefetcher {
        seen: std::sync::Mutex<Vec<String>>,
        fetched: tokio::sync::Notify,
    }

    #[async_trait::async_trait]
    impl Prefetcher for RecordingPrefetcher {
        async fn prefetch(&self, location: &str) -> Result<(), PrefetchError> {
            self.seen.lock().unwrap().push(location.to_owned());
            self.fetched.notify_one();
            Ok(())
        }
    }

    #[tokio::test]
    async fn presenting_preloads_the_following_image() {
        let fetcher = std::sync::Arc::new(RecordingPrefetcher::default());
        let people = vec![
            Person::new("Jane Doe", "math", "a.jpg"),
            Person::new("Bob Lee", "math", "b.jpg"),
        ];
        let session = QuizSession::new(Roster::new(people), QuizSettings::default())
            .with_rng(StdRng::seed_from_u64(3));
        let (quiz_loop, handle) = QuizLoop::new(session, Some(Preloader::new(fetcher.clone())));
        let _task = quiz_loop.spawn();

        let mut rx = handle.subscribe();
        let shown = wait_for(&mut rx, |s| s.phase == QuizPhase::Presenting).await;
        fetcher.fetched.notified().await;

        let shown = shown.image.src.unwrap();
        let expected = if shown == "a.jpg" { "b.jpg" } else { "a.jpg" };
        assert_eq!(*fetcher.seen.lock().unwrap(), [expected]);
    }

    #[tokio::test]
    async fn empty_roster_stays_idle() {
        let (handle, _task) = start(Vec::new());
        let mut rx = handle.subscribe();
        let idle = wait_for(&mut rx, |s| !s.feedback.text.is_empty()).await;
        assert_eq!(idle.phase, QuizPhase::Idle);
        assert_eq!(idle.feedback.text, "No people found in ALL");
        assert_eq!(idle.departments, ["ALL"]);
    }

    #[tokio::test]
    async fn send_after_stop_reports_closed() {
        let (handle, task) = start(solo());
        task.abort();
        let _ = task.await;
        assert!(matches!(
            handle.send(QuizCommand::Skip),
            Err(QuizError::Closed)
        ));
    }
}

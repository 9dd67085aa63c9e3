use std::path::Path;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Person, Roster};
use services::{AppServices, QuizHandle, RandomPhotoService, ServiceConfig};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizView, RandomPhotoView};

#[derive(Clone)]
struct TestApp {
    quiz: Option<QuizHandle>,
    photos: Arc<RandomPhotoService>,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Option<QuizHandle> {
        self.quiz.clone()
    }

    fn photos(&self) -> Arc<RandomPhotoService> {
        Arc::clone(&self.photos)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    RandomPhoto,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::RandomPhoto => rsx! { RandomPhotoView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn people() -> Vec<Person> {
    vec![Person::new("Jane Doe", "math", "images/math/Doe_Jane.jpg").with_variants(["JD"])]
}

/// Start a quiz over `people` and wait until its first question is shown.
pub async fn start_quiz(people: Vec<Person>, photos_root: &Path) -> QuizHandle {
    let config = ServiceConfig::new("people.json", 1_500, false)
        .expect("valid settings")
        .with_photos_root(photos_root);
    let services = AppServices::from_roster(Roster::new(people), config);
    let quiz = services.quiz();
    quiz.subscribe()
        .wait_for(|snapshot| snapshot.ticket.value() > 0)
        .await
        .expect("quiz loop running");
    quiz
}

pub fn setup_view_harness(
    view: ViewKind,
    quiz: Option<QuizHandle>,
    photos_root: &Path,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        quiz,
        photos: Arc::new(RandomPhotoService::new(photos_root)),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizVm, command_for, map_quiz_snapshot};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "page quiz",
            if ctx.has_quiz() {
                QuizBoard {}
            } else {
                p { class: "feedback error", id: "feedback", "Failed to load quiz data." }
            }
        }
    }
}

#[component]
fn QuizBoard() -> Element {
    let ctx = use_context::<AppContext>();
    let Some(quiz) = ctx.quiz() else {
        return rsx! {};
    };

    let vm = use_signal(|| map_quiz_snapshot(&quiz.snapshot()));
    let mut guess = use_signal(String::new);
    let send_failed = use_signal(|| false);

    let quiz_for_updates = quiz.clone();
    use_future(move || {
        let quiz = quiz_for_updates.clone();
        let mut vm = vm;
        let mut guess = guess;
        async move {
            let mut updates = quiz.subscribe();
            loop {
                let next = map_quiz_snapshot(&updates.borrow_and_update());
                if next.ticket != vm.peek().ticket {
                    guess.set(String::new());
                }
                vm.set(next);
                if updates.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut send_failed = send_failed;
        let Some(command) = command_for(intent, &vm.peek()) else {
            return;
        };
        send_failed.set(quiz.send(command).is_err());
    });

    let view: QuizVm = vm.read().clone();
    let feedback_text = if send_failed() {
        "Error loading next question".to_string()
    } else {
        view.feedback_text.clone()
    };

    rsx! {
        div { class: "quiz-header",
            label { r#for: "department-select", "Department: " }
            select {
                id: "department-select",
                value: "{view.selected_department}",
                onchange: move |evt| dispatch.call(QuizIntent::ChangeDepartment(evt.value())),
                for dept in view.departments.iter() {
                    option {
                        key: "{dept.label}",
                        value: "{dept.label}",
                        selected: dept.selected,
                        "{dept.label}"
                    }
                }
            }
            div { class: "stats",
                span { id: "score", "{view.score_label}" }
                span { id: "streak", "{view.streak_label}" }
            }
        }

        div { class: "photo-frame",
            if let Some(src) = view.image_src.clone() {
                img {
                    id: "person-image",
                    src: "{src}",
                    alt: "{view.image_alt}",
                    onerror: move |_| dispatch.call(QuizIntent::ImageFailed),
                }
            } else {
                div { class: "photo-placeholder", "{view.image_alt}" }
            }
        }

        form {
            class: "guess-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                dispatch.call(QuizIntent::Guess(guess()));
            },
            input {
                id: "user-guess",
                r#type: "text",
                placeholder: "Who is this?",
                autocomplete: "off",
                value: "{guess}",
                disabled: !view.guess_enabled,
                oninput: move |evt| guess.set(evt.value()),
            }
            if view.guess_enabled {
                button { id: "submit-btn", r#type: "submit", "Submit" }
            }
        }

        p { id: "feedback", class: "{view.feedback_class}", "{feedback_text}" }

        if view.can_skip {
            button {
                id: "skip-btn",
                r#type: "button",
                onclick: move |_| dispatch.call(QuizIntent::Skip),
                "Skip"
            }
        }

        if let Some(reveal) = view.reveal.clone() {
            div { id: "skip-confirm", class: "reveal",
                p {
                    "It was "
                    strong { id: "skip-name", "{reveal.name}" }
                    " from "
                    strong { id: "skip-dept", "{reveal.department}" }
                    "."
                }
                if view.can_continue {
                    button {
                        id: "continue-btn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Continue),
                        "Continue"
                    }
                }
            }
        }
    }
}

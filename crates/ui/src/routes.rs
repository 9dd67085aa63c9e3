use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{QuizView, RandomPhotoView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
        #[route("/photo", RandomPhotoView)] RandomPhoto {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "topbar",
                h1 { "Faces Quiz" }
                ul {
                    li { Link { to: Route::Quiz {}, "Quiz" } }
                    li { Link { to: Route::RandomPhoto {}, "Random photo" } }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

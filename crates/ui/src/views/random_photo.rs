use dioxus::prelude::*;

use services::{PhotoError, RandomPhoto};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn RandomPhotoView() -> Element {
    let ctx = use_context::<AppContext>();
    let photos = ctx.photos();

    let resource = use_resource(move || {
        let photos = photos.clone();
        async move {
            photos.pick_async().await.map_err(|err| match err {
                PhotoError::NoDepartments(_) | PhotoError::NoPhotos(_) => ViewError::NoPhotos,
                _ => ViewError::Unknown,
            })
        }
    });
    let state: ViewState<RandomPhoto> = view_state_from_resource(&resource);

    rsx! {
        div { class: "page random-photo",
            h2 { "Random photo" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(photo) => rsx! {
                    figure {
                        img { src: "{photo.random_photo}", alt: "{photo.person_name}" }
                        figcaption { id: "person-name", "{photo.person_name}" }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "feedback error", "{err.message()}" }
                },
            }
            button {
                r#type: "button",
                onclick: move |_| {
                    let mut resource = resource;
                    resource.restart();
                },
                "Another"
            }
        }
    }
}

mod quiz;
mod random_photo;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizView;
pub use random_photo::RandomPhotoView;
pub use state::{ViewError, ViewState, view_state_from_resource};

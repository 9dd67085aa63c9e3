#![forbid(unsafe_code)]

pub mod json;
pub mod photos;
pub mod repository;

pub use repository::{InMemoryRoster, RosterSource, Storage, StorageError};

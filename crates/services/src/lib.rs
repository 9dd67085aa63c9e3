#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod photo_service;
pub mod quiz;

pub use app_services::{AppServices, ServiceConfig, load_roster};
pub use error::{AppServicesError, PhotoError, PrefetchError, QuizError};
pub use photo_service::{RandomPhoto, RandomPhotoService};

pub use quiz::{
    Feedback, FeedbackStatus, ImageView, QuestionTicket, QuizCommand, QuizHandle, QuizPhase,
    QuizSession, QuizSnapshot, Reveal,
};

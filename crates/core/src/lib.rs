#![forbid(unsafe_code)]

pub mod matching;
pub mod model;

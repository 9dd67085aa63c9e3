//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quiz_core::model::QuizSettings;
use services::app_services::{DEFAULT_DATA_LOCATION, DEFAULT_PHOTOS_ROOT};

/// Guess-the-face quiz over a roster of people and their photos.
#[derive(Parser, Debug)]
#[command(name = "faces-quiz", version, about, long_about = None)]
pub struct Cli {
    /// Roster JSON: a file path or an http(s) URL
    #[arg(long, global = true, env = "QUIZ_DATA", default_value = DEFAULT_DATA_LOCATION)]
    pub data: String,

    /// Delay before the next question after a correct answer (100..=10000)
    #[arg(
        long,
        global = true,
        env = "QUIZ_AUTO_ADVANCE_MS",
        default_value_t = QuizSettings::DEFAULT_AUTO_ADVANCE_MS
    )]
    pub auto_advance_ms: u32,

    /// Do not fetch the next image ahead of time
    #[arg(long, global = true)]
    pub no_preload: bool,

    /// Root of the `<Department>/<photo>` tree used by the random photo picker
    #[arg(long, global = true, env = "QUIZ_PHOTOS", default_value = DEFAULT_PHOTOS_ROOT)]
    pub photos: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Launch the desktop quiz (default)
    Ui,
    /// Print the department filter options for the roster
    Departments,
    /// Print one random photo as JSON
    RandomPhoto {
        /// Overrides --photos
        root: Option<PathBuf>,
    },
    /// Build a roster JSON file from an `<images>/<Department>/<Last_First>.jpg` tree
    Generate {
        #[arg(long, default_value = "images")]
        images: PathBuf,
        #[arg(long, default_value = DEFAULT_DATA_LOCATION)]
        out: PathBuf,
    },
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Ui)
    }
}

mod cli;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, QuizHandle, RandomPhotoService, ServiceConfig, load_roster};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::cli::{Cli, Command};

struct DesktopApp {
    quiz: Option<QuizHandle>,
    photos: Arc<RandomPhotoService>,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Option<QuizHandle> {
        self.quiz.clone()
    }

    fn photos(&self) -> Arc<RandomPhotoService> {
        Arc::clone(&self.photos)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ServiceConfig::new(cli.data.clone(), cli.auto_advance_ms, !cli.no_preload)?
        .with_photos_root(cli.photos.clone());

    // The quiz loop runs on this runtime's workers while the desktop event
    // loop owns the main thread.
    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command() {
        Command::Ui => {
            let app = runtime.block_on(desktop_app(config));
            let app: Arc<dyn UiApp> = Arc::new(app);
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Faces Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Departments => {
            let roster = runtime.block_on(load_roster(&config.data_location))?;
            for department in roster.departments() {
                println!("{department}");
            }
            Ok(())
        }
        Command::RandomPhoto { root } => {
            let root = root.unwrap_or(config.photos_root);
            let photo = RandomPhotoService::new(root).pick()?;
            println!("{}", serde_json::to_string(&photo)?);
            Ok(())
        }
        Command::Generate { images, out } => {
            let count = generate_roster(&images, &out)?;
            println!("Generated {} with {count} entries", out.display());
            Ok(())
        }
    }
}

/// Load services, falling back to a UI without a quiz when the roster is
/// unavailable so the user sees the load failure.
async fn desktop_app(config: ServiceConfig) -> DesktopApp {
    let photos_root = config.photos_root.clone();
    match AppServices::load(config).await {
        Ok(services) => DesktopApp {
            quiz: Some(services.quiz()),
            photos: services.photos(),
        },
        Err(err) => {
            tracing::error!(error = %err, "quiz unavailable");
            DesktopApp {
                quiz: None,
                photos: Arc::new(RandomPhotoService::new(photos_root)),
            }
        }
    }
}

fn generate_roster(images: &Path, out: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    let people = storage::photos::scan_roster(images)?;
    if let Some(parent) = out.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, serde_json::to_string_pretty(&people)?)?;
    Ok(people.len())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

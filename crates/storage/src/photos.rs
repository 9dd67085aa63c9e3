//! Scanning of `<root>/<Department>/<photo>` image trees.
//!
//! Used by the random photo picker and by roster generation. Listings are
//! sorted so results do not depend on filesystem iteration order.

use quiz_core::model::Person;
use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::StorageError;

/// Extensions the random photo picker considers.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Extensions included when generating a roster.
pub const ROSTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Immediate sub-directories of `root`, sorted by path.
///
/// # Errors
///
/// Returns `StorageError::Io` if `root` cannot be read.
pub fn department_dirs(root: &Path) -> Result<Vec<PathBuf>, StorageError> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Files directly inside `dir` whose extension is one of `extensions`
/// (compared without case), sorted by path.
///
/// # Errors
///
/// Returns `StorageError::Io` if `dir` cannot be read.
pub fn photo_files(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, StorageError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Display name for a photo file: the stem with underscores as spaces.
#[must_use]
pub fn display_name_from_path(path: &Path) -> String {
    file_stem(path).replace('_', " ")
}

/// Roster name for a `Last_First` file stem.
///
/// The final `_` part is the first name and everything before it the last
/// name; a stem without underscores is used as-is.
#[must_use]
pub fn roster_name_from_stem(stem: &str) -> String {
    match stem.rsplit_once('_') {
        Some((last, first)) => format!("{first} {last}"),
        None => stem.replace('_', " "),
    }
}

/// Build roster entries for every photo under `images_dir`.
///
/// Image paths are written as `<images_dir>/<department>/<file>` using `/`
/// separators so the roster can be served as-is.
///
/// # Errors
///
/// Returns `StorageError::Io` if a directory cannot be read.
pub fn scan_roster(images_dir: &Path) -> Result<Vec<Person>, StorageError> {
    let base = images_dir.to_string_lossy().trim_end_matches(['/', '\\']).to_owned();
    let mut people = Vec::new();

    for dir in department_dirs(images_dir)? {
        let department = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        for photo in photo_files(&dir, ROSTER_EXTENSIONS)? {
            let file_name = photo
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let name = roster_name_from_stem(&file_stem(&photo));
            let image = format!("{base}/{department}/{file_name}");
            people.push(Person::new(name, department.clone(), image));
        }
    }

    tracing::info!(dir = %images_dir.display(), count = people.len(), "roster scanned");
    Ok(people)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use super::data::Binding;
use crate::error::SessionError;

/// Supported image extensions
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// List the images directly inside `source`, sorted by file name.
/// Sub-folders are not descended into.
pub fn scan(source: &Path) -> Result<Vec<PathBuf>, SessionError> {
    let mut queue = Vec::new();

    for entry in WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| SessionError::Scan {
            path: source.to_path_buf(),
            source: e.into(),
        })?;

        // Only process files (not directories)
        if !entry.file_type().is_file() {
            continue;
        }

        if is_supported(entry.path()) {
            queue.push(entry.into_path());
        }
    }

    info!(source = %source.display(), images = queue.len(), "Scanned source folder");
    Ok(queue)
}

/// Check the extension against [`IMAGE_EXTENSIONS`], ignoring case
fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Create the source folder and every destination sub-folder if missing
pub fn ensure_destinations(source: &Path, bindings: &[Binding]) -> Result<(), SessionError> {
    for binding in bindings {
        let dir = source.join(&binding.folder);
        fs::create_dir_all(&dir).map_err(|e| SessionError::Scan {
            path: dir.clone(),
            source: e,
        })?;
        debug!(folder = %dir.display(), key = %binding.key, "Destination ready");
    }

    // No destinations configured still leaves a source folder to scan
    fs::create_dir_all(source).map_err(|e| SessionError::Scan {
        path: source.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Code;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_only_supported_extensions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "raw.nef");
        touch(dir.path(), "noext");
        touch(dir.path(), "b.GIF");

        let queue = scan(dir.path()).unwrap();
        assert_eq!(names(&queue), vec!["a.jpg", "b.GIF"]);
    }

    #[test]
    fn test_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "c.gif");
        touch(dir.path(), "a.jpeg");
        touch(dir.path(), "e.png");
        touch(dir.path(), "b.bmp");
        touch(dir.path(), "d.jpg");

        let queue = scan(dir.path()).unwrap();
        assert_eq!(names(&queue), vec!["a.jpeg", "b.bmp", "c.gif", "d.jpg", "e.png"]);
    }

    #[test]
    fn test_subfolders_are_not_scanned() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("accept")).unwrap();
        touch(&dir.path().join("accept"), "old.jpg");
        touch(dir.path(), "new.jpg");

        let queue = scan(dir.path()).unwrap();
        assert_eq!(names(&queue), vec!["new.jpg"]);
    }

    #[test]
    fn test_missing_source_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(scan(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_ensure_destinations_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("images");
        let bindings = vec![Binding {
            key: 'k',
            key_id: Code::KeyK,
            label: "Keep".to_string(),
            folder: PathBuf::from("keep"),
        }];

        ensure_destinations(&source, &bindings).unwrap();
        ensure_destinations(&source, &bindings).unwrap();

        assert!(source.join("keep").is_dir());
    }
}

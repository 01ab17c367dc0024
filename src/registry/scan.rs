use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Checkpoint extensions recognized as detection models
pub const MODEL_EXTENSIONS: [&str; 2] = ["pt", "pth"];

/// Recursively collect model checkpoints under a directory.
///
/// Anything that is not a readable directory (missing path, empty string,
/// a plain file) yields an empty list rather than an error.
pub fn scan_model_dir(path: impl AsRef<Path>) -> Vec<PathBuf> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() || !path.is_dir() {
        return Vec::new();
    }

    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| MODEL_EXTENSIONS.contains(&ext))
        })
        .collect()
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Deployment-level directory pre-populated with model files
pub const DEFAULT_SHARED_CACHE_DIR: &str = "/stable-diffusion-cache/models/adetailer";

/// Regular files directly inside the shared cache directory.
///
/// An unreadable or missing directory yields an empty list.
pub fn list_cache_files(cache_dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(cache_dir) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.path())
        .collect()
}

/// Copy a cached model file into the model directory.
///
/// Returns the destination path so the caller can register it; the copy
/// is not fire-and-forget, a failure surfaces as an error.
pub fn copy_into(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = src
        .file_name()
        .with_context(|| format!("cache entry has no file name: {}", src.display()))?;
    let dest = dest_dir.join(name);

    fs::create_dir_all(dest_dir)
        .with_context(|| format!("failed to create model directory {}", dest_dir.display()))?;
    fs::copy(src, &dest).with_context(|| {
        format!(
            "failed to copy {} into {}",
            src.display(),
            dest_dir.display()
        )
    })?;

    Ok(dest)
}

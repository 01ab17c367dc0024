use std::path::PathBuf;

use anyhow::{Context, Result};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tracing::warn;

/// Repository holding the standard detector checkpoints
pub const DEFAULT_REPO_ID: &str = "Bingsu/adetailer";

/// Something that can materialize a named weight file locally
pub trait WeightSource {
    fn download(&self, file: &str) -> Result<PathBuf>;
}

/// Download-by-filename against a Hugging Face model repository
pub struct HfWeightSource {
    repo_id: String,
}

impl HfWeightSource {
    pub fn new(repo_id: impl Into<String>) -> Self {
        Self {
            repo_id: repo_id.into(),
        }
    }
}

impl WeightSource for HfWeightSource {
    fn download(&self, file: &str) -> Result<PathBuf> {
        let api = Api::new().context("failed to initialize the hub api")?;
        api.repo(Repo::new(self.repo_id.clone(), RepoType::Model))
            .get(file)
            .with_context(|| format!("failed to download '{}' from {}", file, self.repo_id))
    }
}

/// Remote fetch wrapper with a fail-once latch.
///
/// The first download failure disables the fetcher: later calls return
/// `None` without touching the source, so a broken network or repository
/// costs one slow failure instead of one per model. `reset` re-arms it.
pub struct RemoteFetcher {
    source: Box<dyn WeightSource>,
    disabled: bool,
}

impl RemoteFetcher {
    /// Fetcher backed by the standard detector repository
    pub fn new() -> Self {
        Self::with_source(Box::new(HfWeightSource::new(DEFAULT_REPO_ID)))
    }

    pub fn with_source(source: Box<dyn WeightSource>) -> Self {
        Self {
            source,
            disabled: false,
        }
    }

    /// Local path of the named file, or `None` when unavailable
    pub fn fetch(&mut self, file: &str) -> Option<PathBuf> {
        if self.disabled {
            return None;
        }

        match self.source.download(file) {
            Ok(path) => Some(path),
            Err(err) => {
                warn!("failed to load model '{}': {:#}", file, err);
                self.disabled = true;
                None
            }
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Re-arm a fetcher that latched on a failed download
    pub fn reset(&mut self) {
        self.disabled = false;
    }
}

impl Default for RemoteFetcher {
    fn default() -> Self {
        Self::new()
    }
}

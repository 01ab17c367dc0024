pub mod cache;
pub mod remote;
pub mod scan;

pub use cache::{DEFAULT_SHARED_CACHE_DIR, copy_into, list_cache_files};
pub use remote::{DEFAULT_REPO_ID, HfWeightSource, RemoteFetcher, WeightSource};
pub use scan::{MODEL_EXTENSIONS, scan_model_dir};

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Standard detector checkpoints fetched remotely when absent locally.
/// The order here is the order they appear in the registry.
pub const STANDARD_MODELS: [&str; 5] = [
    "face_yolov8n.pt",
    "face_yolov8s.pt",
    "hand_yolov8n.pt",
    "person_yolov8n-seg.pt",
    "person_yolov8s-seg.pt",
];

/// Detectors that need no weight file at all
pub const BUILTIN_DETECTORS: [&str; 4] = [
    "mediapipe_face_full",
    "mediapipe_face_short",
    "mediapipe_face_mesh",
    "mediapipe_face_mesh_eyes_only",
];

/// Where a registered model's weights come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelSource {
    /// Checkpoint file on disk
    Weights(PathBuf),
    /// Ships with the host, nothing to load
    BuiltIn,
}

/// Ordered name -> source mapping; insertion order is the UI listing order
pub type ModelRegistry = IndexMap<String, ModelSource>;

/// Inputs to registry assembly, passed explicitly instead of read from
/// host configuration.
#[derive(Debug, Clone)]
pub struct RegistryOptions {
    /// Primary model directory; cache and remote downloads land here
    pub model_dir: PathBuf,
    /// Optional second directory to scan (user-configured extras)
    pub extra_dir: Option<PathBuf>,
    /// Shared deployment cache to mirror into `model_dir`
    pub shared_cache_dir: PathBuf,
    /// Whether to look up the standard models remotely
    pub use_remote: bool,
    /// UI refresh mode: list everything but perform no filesystem writes
    pub ui_only: bool,
}

impl RegistryOptions {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            extra_dir: None,
            shared_cache_dir: PathBuf::from(DEFAULT_SHARED_CACHE_DIR),
            use_remote: true,
            ui_only: false,
        }
    }

    pub fn with_extra_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.extra_dir = Some(dir.into());
        self
    }

    pub fn with_shared_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.shared_cache_dir = dir.into();
        self
    }

    pub fn with_remote(mut self, use_remote: bool) -> Self {
        self.use_remote = use_remote;
        self
    }

    pub fn with_ui_only(mut self, ui_only: bool) -> Self {
        self.ui_only = ui_only;
        self
    }
}

/// Assembly-time registry value; `Unavailable` entries never survive
/// into the returned registry.
enum Candidate {
    Weights(PathBuf),
    BuiltIn,
    Unavailable,
}

/// Build the model registry.
///
/// Candidate paths come from scanning `model_dir` and `extra_dir`, from
/// mirroring the shared cache, and from remote lookups of the standard
/// model names. Local files win over cached ones, cached ones over remote
/// downloads, and earlier entries are never overwritten by later steps.
/// Per-step failures are logged and skipped; assembly itself cannot fail.
pub fn assemble_registry(options: &RegistryOptions, fetcher: &mut RemoteFetcher) -> ModelRegistry {
    let mut candidates = scan_model_dir(&options.model_dir);
    if let Some(extra) = &options.extra_dir {
        candidates.extend(scan_model_dir(extra));
    }
    debug!("found {} model files on disk", candidates.len());

    // Mirror the whole shared cache into the model directory
    if options.shared_cache_dir.is_dir() {
        for cached in list_cache_files(&options.shared_cache_dir) {
            if let Some(dest) = materialize_cached(&cached, &options.model_dir, options.ui_only) {
                candidates.push(dest);
            }
        }
    }

    let mut entries: IndexMap<String, Candidate> = IndexMap::new();

    if options.use_remote {
        for name in STANDARD_MODELS {
            if options.model_dir.join(name).exists() {
                // Prefer the file already installed locally
                continue;
            }

            let cached = options.shared_cache_dir.join(name);
            if cached.exists() {
                if let Some(dest) = materialize_cached(&cached, &options.model_dir, options.ui_only)
                {
                    candidates.push(dest);
                }
            } else {
                let outcome = match fetcher.fetch(name) {
                    Some(path) => Candidate::Weights(path),
                    None => Candidate::Unavailable,
                };
                entries.insert(name.to_string(), outcome);
            }
        }
    }

    for name in BUILTIN_DETECTORS {
        entries.insert(name.to_string(), Candidate::BuiltIn);
    }

    // Register every discovered path under its file name, keeping the
    // first entry when names collide
    for path in candidates {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if entries.contains_key(name) {
            continue;
        }
        entries.insert(name.to_string(), Candidate::Weights(path));
    }

    // Unavailable lookups are dropped here, so the registry only ever
    // lists models that can actually be selected
    entries
        .into_iter()
        .filter_map(|(name, candidate)| match candidate {
            Candidate::Weights(path) => Some((name, ModelSource::Weights(path))),
            Candidate::BuiltIn => Some((name, ModelSource::BuiltIn)),
            Candidate::Unavailable => None,
        })
        .collect()
}

/// Resolve a shared-cache file to the path it should be registered under.
///
/// In UI-only mode nothing is written and the destination is listed as if
/// already installed. Otherwise the file is copied and a failed copy means
/// the model is not registered at all.
fn materialize_cached(cached: &Path, model_dir: &Path, ui_only: bool) -> Option<PathBuf> {
    if ui_only {
        return cached.file_name().map(|name| model_dir.join(name));
    }

    match copy_into(cached, model_dir) {
        Ok(dest) => Some(dest),
        Err(err) => {
            warn!("skipping cached model {}: {:#}", cached.display(), err);
            None
        }
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use detailkit::registry::{RemoteFetcher, WeightSource};

/// Writes a dummy checkpoint file and returns its path
pub fn write_model_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"weights").expect("Failed to write model file");
    path
}

/// In-memory stand-in for the hub: serves a fixed set of file names and
/// counts how many download attempts it receives.
pub struct StubSource {
    files: HashMap<String, PathBuf>,
    calls: Arc<AtomicUsize>,
}

impl StubSource {
    /// A source where every download fails
    pub fn failing() -> (Self, Arc<AtomicUsize>) {
        Self::with_files(HashMap::new())
    }

    /// A source serving the given names, materialized as files in `hub_dir`
    pub fn serving(hub_dir: &Path, names: &[&str]) -> (Self, Arc<AtomicUsize>) {
        let mut files = HashMap::new();
        for name in names {
            files.insert(name.to_string(), write_model_file(hub_dir, name));
        }
        Self::with_files(files)
    }

    fn with_files(files: HashMap<String, PathBuf>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = Self {
            files,
            calls: calls.clone(),
        };
        (source, calls)
    }
}

impl WeightSource for StubSource {
    fn download(&self, file: &str) -> anyhow::Result<PathBuf> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.files
            .get(file)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("stub hub has no file '{file}'"))
    }
}

/// Fetcher backed by a stub source
pub fn stub_fetcher(source: StubSource) -> RemoteFetcher {
    RemoteFetcher::with_source(Box::new(source))
}

/// Number of download attempts recorded so far
pub fn call_count(calls: &Arc<AtomicUsize>) -> usize {
    calls.load(Ordering::SeqCst)
}

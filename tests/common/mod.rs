mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from detailkit for tests
pub use detailkit::registry::{
    BUILTIN_DETECTORS, ModelSource, RegistryOptions, RemoteFetcher, STANDARD_MODELS,
    assemble_registry,
};

pub mod mask;
pub mod models;
pub mod registry;

pub use mask::{create_bbox_from_mask, create_mask_from_bbox};
pub use models::{Bbox, DetectionOutput};
pub use registry::{
    ModelRegistry, ModelSource, RegistryOptions, RemoteFetcher, WeightSource, assemble_registry,
    scan_model_dir,
};

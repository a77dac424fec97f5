#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

//! Loads 3D models one at a time and turns them into renderable, upright scene objects.
//!
//! See [`loader::ModelLoader`] for the entry point, and the `load_model` demo for a complete
//! load driven end to end.

/// `use meshview::prelude::*;` to import the most common types.
pub mod prelude;

/// Input files and the transient resources a load creates.
pub mod asset {
    pub use meshview_asset::*;
}

/// The staged, single-flight model loading pipeline.
pub mod loader {
    pub use meshview_loader::*;
}

/// Logging setup.
#[cfg(feature = "log")]
pub mod log {
    pub use meshview_log::*;
}

/// Scene objects, meshes and materials produced by a conversion.
pub mod scene {
    pub use meshview_scene::*;
}

/// Single-threaded task execution.
pub mod tasks {
    pub use meshview_tasks::*;
}

/// Transforms and up axis correction.
pub mod transform {
    pub use meshview_transform::*;
}

#![doc = "The renderable side of a loaded model: scene objects, meshes and materials."]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod color;
mod material;
mod object;

pub use color::*;
pub use material::*;
pub use object::*;

/// The scene prelude.
///
/// This includes the most common types in this crate, re-exported for your convenience.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{Material, MaterialColor, MeshNode, RgbColor, SceneObject, SharedMaterial};
}

#![doc = "Local transforms and up-axis normalization for imported models."]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod direction;
mod transform;
mod up_axis;

pub use direction::Direction;
pub use transform::Transform;
pub use up_axis::{CANONICAL_UP, up_axis_rotation};

pub use glam::{Quat, Vec3};

/// The transform prelude.
///
/// This includes the most common types in this crate, re-exported for your convenience.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{Direction, Transform, up_axis_rotation};
}

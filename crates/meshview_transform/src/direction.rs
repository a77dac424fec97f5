use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The coordinate axis a model's source format treats as vertical.
///
/// [`Direction::Y`] matches the viewer and needs no correction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Models authored with `+X` pointing up.
    X,
    /// Models authored with `+Y` pointing up.
    #[default]
    Y,
    /// Models authored with `+Z` pointing up, common for CAD and 3D printing formats.
    Z,
}

impl Direction {
    /// Returns the unit vector of this axis in source-model coordinates.
    #[inline]
    pub const fn up_vector(self) -> Vec3 {
        match self {
            Direction::X => Vec3::X,
            Direction::Y => Vec3::Y,
            Direction::Z => Vec3::Z,
        }
    }

    /// Returns `true` if models using this axis can be shown without rotating them.
    #[inline]
    pub const fn is_canonical(self) -> bool {
        matches!(self, Direction::Y)
    }
}

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Direction, up_axis_rotation};

/// The position, rotation and scale of a scene object relative to its parent.
///
/// A model's root object carries the correction that brings the model's declared up axis onto the
/// viewer's, see [`Transform::correct_up_axis`].
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    /// Position of the object.
    pub translation: Vec3,
    /// Rotation of the object.
    pub rotation: Quat,
    /// Scale of the object.
    pub scale: Vec3,
}

impl Transform {
    /// An identity [`Transform`] with no translation, no rotation, and a scale of 1 on all axes.
    pub const IDENTITY: Self = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Creates a new [`Transform`] at the position `(x, y, z)`.
    #[inline]
    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Transform {
            translation: Vec3::new(x, y, z),
            ..Self::IDENTITY
        }
    }

    /// Creates a new [`Transform`], with `rotation`. Translation will be 0 and scale 1 on
    /// all axes.
    #[inline]
    pub const fn from_rotation(rotation: Quat) -> Self {
        Transform {
            rotation,
            ..Self::IDENTITY
        }
    }

    /// Returns this [`Transform`] with a new rotation.
    #[inline]
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rotates this [`Transform`] by `rotation` in the parent's frame.
    #[inline]
    pub fn rotate(&mut self, rotation: Quat) {
        self.rotation = rotation * self.rotation;
    }

    /// Rotates this [`Transform`] by `rotation` in its own local frame, composed after the
    /// rotation it already has.
    #[inline]
    pub fn rotate_local(&mut self, rotation: Quat) {
        self.rotation *= rotation;
    }

    /// Applies the up-axis correction for a model authored with `up` as its vertical axis.
    ///
    /// The correction is applied in the local frame, so any orientation the converter gave the
    /// root is preserved underneath it. Canonical models are left untouched.
    pub fn correct_up_axis(&mut self, up: Direction) {
        if up.is_canonical() {
            return;
        }
        trace!("correcting {:?} up axis", up);
        self.rotate_local(up_axis_rotation(up));
    }

    /// Transforms the given `point`, applying scale, rotation and translation.
    #[inline]
    pub fn transform_point(&self, mut point: Vec3) -> Vec3 {
        point = self.scale * point;
        point = self.rotation * point;
        point += self.translation;
        point
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

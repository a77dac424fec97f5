use core::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::Direction;

/// The viewer's vertical axis. Every imported model is rotated so its declared up axis lands here.
pub const CANONICAL_UP: Direction = Direction::Y;

/// Returns the rotation that turns a model authored with `up` as its vertical axis into one whose
/// vertical axis is [`CANONICAL_UP`].
///
/// - [`Direction::X`]: +90° about `+Z`, which maps `+X` onto `+Y`.
/// - [`Direction::Z`]: -90° about `+X`, which maps `+Z` onto `+Y`.
/// - [`Direction::Y`]: [`Quat::IDENTITY`].
pub fn up_axis_rotation(up: Direction) -> Quat {
    match up {
        Direction::X => Quat::from_axis_angle(Vec3::Z, FRAC_PI_2),
        Direction::Y => Quat::IDENTITY,
        Direction::Z => Quat::from_axis_angle(Vec3::X, -FRAC_PI_2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn y_up_is_identity() {
        assert_eq!(up_axis_rotation(Direction::Y), Quat::IDENTITY);
    }

    #[test]
    fn declared_up_maps_to_canonical_up() {
        for direction in [Direction::X, Direction::Y, Direction::Z] {
            let rotated = up_axis_rotation(direction) * direction.up_vector();
            assert!(
                rotated.abs_diff_eq(CANONICAL_UP.up_vector(), EPSILON),
                "{direction:?} up rotated to {rotated}"
            );
        }
    }

    #[test]
    fn x_and_z_rotations_differ_and_are_not_identity() {
        let x = up_axis_rotation(Direction::X);
        let z = up_axis_rotation(Direction::Z);
        assert!(!x.abs_diff_eq(z, EPSILON));
        assert!(!x.abs_diff_eq(Quat::IDENTITY, EPSILON));
        assert!(!z.abs_diff_eq(Quat::IDENTITY, EPSILON));
        assert!(x.is_normalized());
        assert!(z.is_normalized());
    }
}

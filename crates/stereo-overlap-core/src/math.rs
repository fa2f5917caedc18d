//! Scalar type aliases and unit conversions.

use nalgebra::{Matrix3, Vector2, Vector3};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 3×3 matrix with [`Real`] entries.
pub type Mat3 = Matrix3<Real>;

/// Meters per inch.
pub const METERS_PER_INCH: Real = 0.0254;
/// Meters per millimeter.
pub const METERS_PER_MM: Real = 1.0e-3;
/// Microradians per radian.
pub const MICRORAD_PER_RAD: Real = 1.0e6;

/// Convert a length in inches to meters.
pub fn inches_to_meters(inches: Real) -> Real {
    inches * METERS_PER_INCH
}

/// Convert a length in millimeters to meters.
pub fn mm_to_meters(mm: Real) -> Real {
    mm * METERS_PER_MM
}

/// Full angle subtended by an extent `size` seen from `distance` on axis:
/// `2·atan(size / (2·distance))`.
///
/// Both arguments share the same length unit.
pub fn subtended_angle(size: Real, distance: Real) -> Real {
    2.0 * (size / (2.0 * distance)).atan()
}

/// Inverse of [`subtended_angle`]: the distance at which an extent `size`
/// subtends the full angle `angle` (radians).
pub fn distance_for_angle(size: Real, angle: Real) -> Real {
    size / (2.0 * (angle / 2.0).tan())
}

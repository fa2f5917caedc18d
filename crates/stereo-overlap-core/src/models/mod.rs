//! Camera description and the optics derived from it.
//!
//! A [`CameraSpec`] holds the physical inputs (focal length, pixel counts,
//! focal-plane-array size, target size). [`CameraParams`] is computed from a
//! spec once per baseline and carries everything the overlap computation
//! needs:
//!
//! - horizontal and vertical field of view,
//! - instantaneous field of view (angle per pixel),
//! - ranges at which the target fills 90/95/100 % of the narrower FOV.
//!
//! [`PinholeIntrinsics`] expresses the same camera as a pixel-unit `K`
//! matrix for projecting points.

mod intrinsics;
mod params;
mod spec;

pub use intrinsics::*;
pub use params::*;
pub use spec::*;

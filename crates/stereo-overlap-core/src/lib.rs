//! Closed-form stereo camera geometry for `stereo-overlap`.
//!
//! This crate contains:
//! - scalar type aliases and unit conversions (`Real`, `Mat3`, ...),
//! - the physical camera description ([`CameraSpec`]) and the optics derived
//!   from it ([`CameraParams`]: FOV, iFOV, fill ranges),
//! - range sweeps ([`RangeSweep`]) and stereo overlap-vs-range curves
//!   ([`OverlapCurve`]),
//! - a per-baseline batch entry point ([`compute_for_baselines`]).
//!
//! Every operation is a pure function of its inputs. Invalid inputs are
//! reported as [`GeometryError`] before any computation takes place.
//!
//! # Example
//!
//! ```
//! use stereo_overlap_core::{compute_for_baselines, CameraSpec, RangeScale, RangeSweep};
//!
//! let camera = CameraSpec::default();
//! let sweep = RangeSweep::new(10.0, 1000.0, RangeScale::Logarithmic);
//! let results = compute_for_baselines(&[8.0, 16.0], &camera, &sweep).unwrap();
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].curve.len(), 200);
//! ```

/// Error types.
mod error;
/// Scalar aliases and unit conversions.
mod math;
/// Camera description and derived optics.
mod models;
/// Stereo overlap-vs-range curves.
mod overlap;
/// Range sampling.
mod sampling;
/// Input validation helpers.
mod validate;
/// Per-baseline batch evaluation.
mod batch;

pub use batch::*;
pub use error::*;
pub use math::*;
pub use models::*;
pub use overlap::*;
pub use sampling::*;
pub use validate::*;

//! Stereo overlap as a function of range.
//!
//! For a target at range `r`, the overlap is the fraction of its projected
//! pixel extent that is not shifted out of the common footprint by the
//! stereo disparity:
//!
//! ```text
//! overlap(r) = clamp((proj(r) - disparity(r)) / proj(r), 0, 1) * 100
//! ```
//!
//! Both `proj` and `disparity` scale roughly as `1 / r`, so curves are nearly
//! flat far from the camera and bend only where the target's angular size
//! stops being small.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{ensure_positive, inches_to_meters, CameraParams, RangeScale, RangeSweep, Real, Result};

/// Overlap percentage sampled over a range sweep for one baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapCurve {
    /// Stereo baseline (inches).
    pub baseline_in: Real,
    /// Sampling scale used for `ranges`.
    pub scale: RangeScale,
    /// Sampled ranges (m), increasing.
    pub ranges: Vec<Real>,
    /// Overlap at each range, percent in `[0, 100]`.
    pub overlap_percent: Vec<Real>,
}

impl OverlapCurve {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate `(range_m, overlap_percent)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (Real, Real)> + '_ {
        self.ranges
            .iter()
            .copied()
            .zip(self.overlap_percent.iter().copied())
    }

    /// Smallest and largest overlap on the curve.
    pub fn overlap_bounds(&self) -> Option<(Real, Real)> {
        self.overlap_percent.iter().copied().fold(None, |acc, v| {
            Some(match acc {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            })
        })
    }
}

/// Overlap percentage for a single range.
///
/// `baseline_m` is in meters. The result is clamped to `[0, 100]`.
pub fn overlap_at_range(params: &CameraParams, baseline_m: Real, range_m: Real) -> Real {
    let proj = params.projected_size_px(range_m);
    let disparity = params.disparity_px(baseline_m, range_m);
    ((proj - disparity) / proj).clamp(0.0, 1.0) * 100.0
}

/// Sample the overlap curve for `baseline_in` (inches) between `range_min`
/// and `range_max` (meters).
///
/// Fails with [`crate::GeometryError::InvalidParameter`] if the baseline is
/// not positive, if `params` fails [`CameraParams::validate`], if
/// `range_max <= range_min`, or if the ranges are not positive. Nothing is
/// computed on failure.
pub fn compute_overlap_vs_range(
    baseline_in: Real,
    params: &CameraParams,
    range_min: Real,
    range_max: Real,
    scale: RangeScale,
) -> Result<OverlapCurve> {
    overlap_curve(
        baseline_in,
        params,
        &RangeSweep::new(range_min, range_max, scale),
    )
}

/// [`compute_overlap_vs_range`] taking a [`RangeSweep`].
pub fn overlap_curve(
    baseline_in: Real,
    params: &CameraParams,
    sweep: &RangeSweep,
) -> Result<OverlapCurve> {
    ensure_positive("baseline_in", baseline_in)?;
    params.validate()?;
    let ranges = sweep.samples()?;
    let baseline_m = inches_to_meters(baseline_in);

    let overlap_percent: Vec<Real> = ranges
        .iter()
        .map(|&r| overlap_at_range(params, baseline_m, r))
        .collect();

    let curve = OverlapCurve {
        baseline_in,
        scale: sweep.scale,
        ranges,
        overlap_percent,
    };
    if let Some((lo, hi)) = curve.overlap_bounds() {
        debug!(
            "overlap curve for {baseline_in} in baseline: {} samples, {lo:.2}%..{hi:.2}%",
            curve.len()
        );
    }
    Ok(curve)
}

use serde::{Deserialize, Serialize};

use crate::{
    overlap_curve, CameraParams, CameraSpec, GeometryError, OverlapCurve, RangeSweep, Real,
    Result,
};

/// Camera parameters and overlap curve for one baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineResult {
    /// Stereo baseline (inches).
    pub baseline_in: Real,
    /// Camera optics.
    pub params: CameraParams,
    /// Overlap vs range.
    pub curve: OverlapCurve,
}

/// Evaluate every baseline against the same camera and range sweep.
///
/// Output order matches `baselines`. The sweep is validated once up front;
/// baselines are then checked in order and the first non-positive one is
/// reported by index. An empty list is an error.
pub fn compute_for_baselines(
    baselines: &[Real],
    camera: &CameraSpec,
    sweep: &RangeSweep,
) -> Result<Vec<BaselineResult>> {
    if baselines.is_empty() {
        return Err(GeometryError::NoBaselines);
    }
    camera.validate()?;
    sweep.validate()?;
    if let Some((index, &value)) = baselines
        .iter()
        .enumerate()
        .find(|(_, b)| !(b.is_finite() && **b > 0.0))
    {
        return Err(GeometryError::InvalidBaseline { index, value });
    }

    baselines
        .iter()
        .map(|&baseline_in| {
            let params = CameraParams::from_spec(baseline_in, camera)?;
            let curve = overlap_curve(baseline_in, &params, sweep)?;
            Ok(BaselineResult {
                baseline_in,
                params,
                curve,
            })
        })
        .collect()
}

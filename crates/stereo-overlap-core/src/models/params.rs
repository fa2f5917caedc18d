use log::debug;
use serde::{Deserialize, Serialize};

use super::{CameraSpec, PinholeIntrinsics};
use crate::{
    distance_for_angle, ensure_positive, subtended_angle, GeometryError, Real, Result,
    MICRORAD_PER_RAD,
};

/// Smallest projected target size in pixels; keeps the overlap ratio finite.
pub const MIN_PROJECTED_PX: Real = 1e-8;

/// Fill percentages reported on every [`CameraParams`].
pub const FILL_PERCENTAGES: [Real; 3] = [90.0, 95.0, 100.0];

/// Optics derived from a [`CameraSpec`].
///
/// Only `baseline_in` depends on the baseline; it is carried for labelling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraParams {
    /// Stereo baseline these parameters were computed for (inches).
    pub baseline_in: Real,
    /// Physical inputs.
    pub camera: CameraSpec,
    /// Focal length in meters.
    pub focal_length_m: Real,
    /// Horizontal field of view in radians.
    pub fov_width_rad: Real,
    /// Vertical field of view in radians.
    pub fov_height_rad: Real,
    /// Horizontal field of view in degrees.
    pub fov_width_deg: Real,
    /// Vertical field of view in degrees.
    pub fov_height_deg: Real,
    /// Angle subtended by one pixel, degrees.
    pub ifov_deg: Real,
    /// Angle subtended by one pixel, microradians.
    pub ifov_urad: Real,
    /// Range (m) at which the target fills 90 % of the narrower FOV.
    pub range_at_fill_90: Real,
    /// Range (m) at which the target fills 95 % of the narrower FOV.
    pub range_at_fill_95: Real,
    /// Range (m) at which the target fills the narrower FOV.
    pub range_at_fill_100: Real,
}

/// Compute camera optics from positional inputs.
///
/// Equivalent to [`CameraParams::from_spec`] with a [`CameraSpec`] built
/// from the arguments.
pub fn compute_camera_params(
    baseline_in: Real,
    focal_length_mm: Real,
    pixel_width: u32,
    pixel_height: u32,
    fpa_width_m: Real,
    fpa_height_m: Real,
    target_size_m: Real,
) -> Result<CameraParams> {
    let spec = CameraSpec {
        focal_length_mm,
        pixel_width,
        pixel_height,
        fpa_width_m,
        fpa_height_m,
        target_size_m,
    };
    CameraParams::from_spec(baseline_in, &spec)
}

impl CameraParams {
    /// Compute FOV, iFOV and fill ranges for `spec`.
    ///
    /// Fails with [`GeometryError::InvalidParameter`] if the baseline or any
    /// field of `spec` is not strictly positive.
    pub fn from_spec(baseline_in: Real, spec: &CameraSpec) -> Result<Self> {
        ensure_positive("baseline_in", baseline_in)?;
        spec.validate()?;

        let focal_length_m = spec.focal_length_m();
        let fov_width_rad = subtended_angle(spec.fpa_width_m, focal_length_m);
        let fov_height_rad = subtended_angle(spec.fpa_height_m, focal_length_m);
        // iFOV follows the horizontal pixel pitch.
        let ifov_rad = subtended_angle(spec.pixel_pitch_x_m(), focal_length_m);

        let narrow = fov_width_rad.min(fov_height_rad);
        let [p90, p95, p100] = FILL_PERCENTAGES;

        let params = Self {
            baseline_in,
            camera: *spec,
            focal_length_m,
            fov_width_rad,
            fov_height_rad,
            fov_width_deg: fov_width_rad.to_degrees(),
            fov_height_deg: fov_height_rad.to_degrees(),
            ifov_deg: ifov_rad.to_degrees(),
            ifov_urad: ifov_rad * MICRORAD_PER_RAD,
            range_at_fill_90: fill_range(spec.target_size_m, narrow, p90),
            range_at_fill_95: fill_range(spec.target_size_m, narrow, p95),
            range_at_fill_100: fill_range(spec.target_size_m, narrow, p100),
        };
        debug!(
            "camera params: fov {:.3}x{:.3} deg, ifov {:.3} urad, full fill at {:.3} m",
            params.fov_width_deg, params.fov_height_deg, params.ifov_urad, params.range_at_fill_100
        );
        Ok(params)
    }

    /// Check the physical inputs and the derived optics used for sampling.
    ///
    /// Fields are public and deserializable, so params that did not come
    /// from [`CameraParams::from_spec`] are checked here before use.
    pub fn validate(&self) -> Result<()> {
        self.camera.validate()?;
        ensure_positive("focal_length_m", self.focal_length_m)?;
        ensure_positive("fov_width_rad", self.fov_width_rad)?;
        ensure_positive("fov_height_rad", self.fov_height_rad)?;
        Ok(())
    }

    /// Narrower of the two fields of view, radians.
    pub fn narrow_fov_rad(&self) -> Real {
        self.fov_width_rad.min(self.fov_height_rad)
    }

    /// iFOV in radians.
    pub fn ifov_rad(&self) -> Real {
        self.ifov_urad / MICRORAD_PER_RAD
    }

    /// Range (m) at which the target subtends `percent` % of the narrower FOV.
    ///
    /// `percent` must lie in `(0, 100]`.
    pub fn range_at_fill(&self, percent: Real) -> Result<Real> {
        if !(percent.is_finite() && percent > 0.0 && percent <= 100.0) {
            return Err(GeometryError::invalid("fill_percent", percent));
        }
        Ok(fill_range(
            self.camera.target_size_m,
            self.narrow_fov_rad(),
            percent,
        ))
    }

    /// Angular size of the target (radians) at `range_m`.
    pub fn target_angular_size(&self, range_m: Real) -> Real {
        subtended_angle(self.camera.target_size_m, range_m)
    }

    /// Projected target extent in pixels at `range_m`.
    ///
    /// Uses the smaller of the two axis projections (the binding one),
    /// floored at [`MIN_PROJECTED_PX`].
    pub fn projected_size_px(&self, range_m: Real) -> Real {
        let angular_size = self.target_angular_size(range_m);
        let proj_w = angular_size / (self.fov_width_rad / self.camera.pixel_width as Real);
        let proj_h = angular_size / (self.fov_height_rad / self.camera.pixel_height as Real);
        proj_w.min(proj_h).max(MIN_PROJECTED_PX)
    }

    /// Stereo disparity in pixels for a point at `range_m` seen by two
    /// cameras `baseline_m` apart: `b·f / (z·pitch_x)`.
    pub fn disparity_px(&self, baseline_m: Real, range_m: Real) -> Real {
        (baseline_m * self.focal_length_m) / (range_m * self.camera.pixel_pitch_x_m())
    }

    /// Equivalent pinhole intrinsics in pixel units.
    pub fn intrinsics(&self) -> PinholeIntrinsics {
        PinholeIntrinsics::from_spec(&self.camera)
    }
}

fn fill_range(target_size_m: Real, narrow_fov_rad: Real, percent: Real) -> Real {
    let fill_angle = narrow_fov_rad * (percent / 100.0);
    distance_for_angle(target_size_m, fill_angle)
}

use serde::{Deserialize, Serialize};

use super::CameraSpec;
use crate::{Mat3, Real, Vec2, Vec3};

/// Pinhole intrinsics in pixel units derived from physical sensor data.
///
/// The calibration matrix `K` has the form:
///
/// ```text
/// [ fx   0  cx ]
/// [  0  fy  cy ]
/// [  0   0   1 ]
/// ```
///
/// with `fx = f / pitch_x`, `fy = f / pitch_y` and the principal point at the
/// sensor center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinholeIntrinsics {
    /// Focal length in pixels along X.
    pub fx: Real,
    /// Focal length in pixels along Y.
    pub fy: Real,
    /// Principal point X coordinate in pixels.
    pub cx: Real,
    /// Principal point Y coordinate in pixels.
    pub cy: Real,
}

impl PinholeIntrinsics {
    /// Ideal intrinsics for `spec` (no skew, centered principal point).
    pub fn from_spec(spec: &CameraSpec) -> Self {
        let f = spec.focal_length_m();
        Self {
            fx: f / spec.pixel_pitch_x_m(),
            fy: f / spec.pixel_pitch_y_m(),
            cx: spec.pixel_width as Real / 2.0,
            cy: spec.pixel_height as Real / 2.0,
        }
    }

    /// Return the 3x3 camera intrinsics matrix K.
    pub fn k_matrix(&self) -> Mat3 {
        Mat3::new(self.fx, 0.0, self.cx, 0.0, self.fy, self.cy, 0.0, 0.0, 1.0)
    }

    /// Project a point in camera coordinates to pixels.
    ///
    /// Returns `None` for points on or behind the image plane.
    pub fn project(&self, p_c: &Vec3) -> Option<Vec2> {
        if p_c.z <= 0.0 {
            return None;
        }
        let uv = self.k_matrix() * p_c;
        Some(Vec2::new(uv.x / uv.z, uv.y / uv.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CameraParams;

    #[test]
    fn principal_point_is_center() {
        let k = PinholeIntrinsics::from_spec(&CameraSpec::default());
        let px = k.project(&Vec3::new(0.0, 0.0, 5.0)).unwrap();
        assert!((px.x - 960.0).abs() < 1e-9);
        assert!((px.y - 600.0).abs() < 1e-9);
        assert!(k.project(&Vec3::new(0.0, 0.0, -1.0)).is_none());
    }

    #[test]
    fn sensor_edge_maps_to_fov_edge() {
        let params = CameraParams::from_spec(8.0, &CameraSpec::default()).unwrap();
        let k = params.intrinsics();
        let half = params.fov_width_rad / 2.0;
        let px = k.project(&Vec3::new(half.tan(), 0.0, 1.0)).unwrap();
        assert!((px.x - 1920.0).abs() < 1e-6, "u={}", px.x);
    }

    #[test]
    fn two_view_shift_matches_disparity() {
        let params = CameraParams::from_spec(12.0, &CameraSpec::default()).unwrap();
        let k = params.intrinsics();
        let baseline_m = 12.0 * 0.0254;
        for range in [10.0, 75.0, 400.0] {
            let left = k.project(&Vec3::new(0.0, 0.0, range)).unwrap();
            let right = k.project(&Vec3::new(-baseline_m, 0.0, range)).unwrap();
            let shift = left.x - right.x;
            let expected = params.disparity_px(baseline_m, range);
            assert!((shift - expected).abs() < 1e-9, "range={range}");
        }
    }
}

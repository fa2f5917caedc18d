use serde::{Deserialize, Serialize};

use crate::{ensure_pixel_count, ensure_positive, mm_to_meters, Real, Result};

/// Physical description of one camera of a stereo pair and the target it
/// observes.
///
/// Both cameras of the pair are assumed identical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    /// Lens focal length in millimeters.
    pub focal_length_mm: Real,
    /// Sensor resolution along X in pixels.
    pub pixel_width: u32,
    /// Sensor resolution along Y in pixels.
    pub pixel_height: u32,
    /// Physical sensor (FPA) width in meters.
    pub fpa_width_m: Real,
    /// Physical sensor (FPA) height in meters.
    pub fpa_height_m: Real,
    /// Linear size of the object of interest in meters.
    pub target_size_m: Real,
}

impl Default for CameraSpec {
    /// Full-frame 35 mm sensor, 1920×1200, looking at a 1 m target.
    fn default() -> Self {
        Self {
            focal_length_mm: 35.0,
            pixel_width: 1920,
            pixel_height: 1200,
            fpa_width_m: 0.036,
            fpa_height_m: 0.024,
            target_size_m: 1.0,
        }
    }
}

impl CameraSpec {
    /// Check that every field lies in its domain.
    ///
    /// Fields are checked in declaration order; the first violation is
    /// reported.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("focal_length_mm", self.focal_length_mm)?;
        ensure_pixel_count("pixel_width", self.pixel_width)?;
        ensure_pixel_count("pixel_height", self.pixel_height)?;
        ensure_positive("fpa_width_m", self.fpa_width_m)?;
        ensure_positive("fpa_height_m", self.fpa_height_m)?;
        ensure_positive("target_size_m", self.target_size_m)?;
        Ok(())
    }

    /// Focal length in meters.
    pub fn focal_length_m(&self) -> Real {
        mm_to_meters(self.focal_length_mm)
    }

    /// Pixel pitch along X in meters.
    pub fn pixel_pitch_x_m(&self) -> Real {
        self.fpa_width_m / self.pixel_width as Real
    }

    /// Pixel pitch along Y in meters.
    pub fn pixel_pitch_y_m(&self) -> Real {
        self.fpa_height_m / self.pixel_height as Real
    }
}

use crate::{GeometryError, Real, Result};

/// Require `value` to be finite and strictly positive.
///
/// Returns the value unchanged.
pub fn ensure_positive(field: &'static str, value: Real) -> Result<Real> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid(field, value))
    }
}

/// Require a pixel count to be a positive integer.
pub fn ensure_pixel_count(field: &'static str, value: u32) -> Result<u32> {
    if value > 0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid(field, value as Real))
    }
}

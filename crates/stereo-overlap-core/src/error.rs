use thiserror::Error;

/// Errors returned by the geometry engine.
///
/// All variants describe an input outside its declared domain. The engine
/// never substitutes defaults or returns partial results.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A scalar input is outside its domain (non-positive, non-finite,
    /// or inconsistent with another input).
    #[error("invalid parameter {field}: {value}")]
    InvalidParameter { field: &'static str, value: f64 },
    /// A baseline in a batch is not a positive, finite length.
    #[error("invalid baseline #{index}: {value} (must be > 0)")]
    InvalidBaseline { index: usize, value: f64 },
    /// A batch was given no baselines at all.
    #[error("enter one or more positive baseline(s)")]
    NoBaselines,
}

impl GeometryError {
    pub(crate) fn invalid(field: &'static str, value: f64) -> Self {
        Self::InvalidParameter { field, value }
    }

    /// Every variant belongs to the invalid-parameter class.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::InvalidBaseline { .. } | Self::NoBaselines
        )
    }

    /// Name of the offending input.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidParameter { field, .. } => field,
            Self::InvalidBaseline { .. } | Self::NoBaselines => "baselines",
        }
    }

    /// Offending value; the baseline count (zero) for [`Self::NoBaselines`].
    pub fn value(&self) -> f64 {
        match *self {
            Self::InvalidParameter { value, .. } | Self::InvalidBaseline { value, .. } => value,
            Self::NoBaselines => 0.0,
        }
    }
}

/// Result alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field_and_value() {
        let err = GeometryError::invalid("focal_length_mm", -1.0);
        assert_eq!(err.to_string(), "invalid parameter focal_length_mm: -1");
        assert_eq!(err.field(), "focal_length_mm");
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn baseline_error_reports_index() {
        let err = GeometryError::InvalidBaseline {
            index: 2,
            value: 0.0,
        };
        assert_eq!(err.to_string(), "invalid baseline #2: 0 (must be > 0)");
        assert_eq!(err.field(), "baselines");
        assert_eq!(err.value(), 0.0);
    }

    #[test]
    fn empty_batch_has_its_own_message() {
        let err = GeometryError::NoBaselines;
        assert_eq!(err.to_string(), "enter one or more positive baseline(s)");
        assert_eq!(err.field(), "baselines");
        assert!(err.is_invalid_parameter());
    }
}

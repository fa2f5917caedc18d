use serde::{Deserialize, Serialize};

use crate::{GeometryError, Real, Result};

/// Number of range samples in every overlap curve.
pub const OVERLAP_SAMPLES: usize = 200;

/// Distribution of samples along the range axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeScale {
    /// Evenly spaced in range.
    #[default]
    Linear,
    /// Evenly spaced in `log10(range)`.
    Logarithmic,
}

impl std::str::FromStr for RangeScale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "lin" => Ok(Self::Linear),
            "logarithmic" | "log" => Ok(Self::Logarithmic),
            other => Err(format!(
                "unknown range scale '{other}' (expected linear or logarithmic)"
            )),
        }
    }
}

impl std::fmt::Display for RangeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

/// Range interval (meters) and sampling scale for an overlap sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSweep {
    /// First sampled range (m).
    pub min: Real,
    /// Last sampled range (m); must exceed `min`.
    pub max: Real,
    /// Sample distribution.
    #[serde(default)]
    pub scale: RangeScale,
}

impl Default for RangeSweep {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 1000.0,
            scale: RangeScale::Linear,
        }
    }
}

impl RangeSweep {
    pub fn new(min: Real, max: Real, scale: RangeScale) -> Self {
        Self { min, max, scale }
    }

    /// Check interval ordering and positivity of the ranges.
    ///
    /// Ordering is checked first so an inverted interval is always reported
    /// on `range_max`.
    pub fn validate(&self) -> Result<()> {
        if !self.max.is_finite() || self.max <= self.min {
            return Err(GeometryError::invalid("range_max", self.max));
        }
        // Ranges are distances; log sampling additionally needs log10(min).
        if !(self.min.is_finite() && self.min > 0.0) {
            return Err(GeometryError::invalid("range_min", self.min));
        }
        Ok(())
    }

    /// Validated range samples, [`OVERLAP_SAMPLES`] long.
    pub fn samples(&self) -> Result<Vec<Real>> {
        self.validate()?;
        Ok(match self.scale {
            RangeScale::Linear => linspace(self.min, self.max, OVERLAP_SAMPLES),
            RangeScale::Logarithmic => logspace(self.min, self.max, OVERLAP_SAMPLES),
        })
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// The endpoints are reproduced exactly. `n == 1` yields `[start]`.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as Real;
            let mut out: Vec<Real> = (0..n).map(|i| start + step * i as Real).collect();
            out[n - 1] = end;
            out
        }
    }
}

/// `n` values from `start` to `end` inclusive, evenly spaced in `log10`.
///
/// Both bounds must be positive. The endpoints are reproduced exactly.
pub fn logspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    let mut out: Vec<Real> = linspace(start.log10(), end.log10(), n)
        .into_iter()
        .map(|e| (10.0 as Real).powf(e))
        .collect();
    if let Some(first) = out.first_mut() {
        *first = start;
    }
    if n > 1 {
        out[n - 1] = end;
    }
    out
}

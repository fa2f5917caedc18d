use anyhow::{bail, ensure, Result};
use stereo_overlap_core::Real;

/// Parse a comma-separated baseline list such as `"8, 12,16"` (inches).
///
/// Empty entries are skipped. Every remaining entry must be a positive real;
/// the first offending token is named in the error.
pub fn parse_baselines(text: &str) -> Result<Vec<Real>> {
    let mut baselines = Vec::new();
    for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<Real>() {
            Ok(v) if v.is_finite() && v > 0.0 => baselines.push(v),
            _ => bail!("invalid baseline: '{token}'"),
        }
    }
    ensure!(
        !baselines.is_empty(),
        "enter one or more positive baseline(s)"
    );
    Ok(baselines)
}

/// Column label for a baseline, e.g. `8.0"`.
///
/// Whole numbers keep their `.0` so headers line up with tables exported by
/// the desktop calculator.
pub fn baseline_label(baseline_in: Real) -> String {
    format!("{baseline_in:?}\"")
}

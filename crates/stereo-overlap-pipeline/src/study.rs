use anyhow::{ensure, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use stereo_overlap_core::{
    compute_for_baselines, BaselineResult, CameraSpec, RangeSweep, Real,
};

use crate::ParameterTable;

/// Everything needed to run an overlap study.
///
/// Missing sections fall back to [`Default`], which reproduces the
/// calculator's stock form: 8/12/16 in baselines, a 35 mm lens on a
/// 1920×1200 full-frame sensor, a 1 m target and a linear 10–1000 m sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapStudyInput {
    /// Stereo baselines in inches, evaluated in order.
    #[serde(default = "default_baselines")]
    pub baselines: Vec<Real>,
    /// Physical camera and target.
    #[serde(default)]
    pub camera: CameraSpec,
    /// Range sweep for the overlap curves.
    #[serde(default)]
    pub sweep: RangeSweep,
}

impl Default for OverlapStudyInput {
    fn default() -> Self {
        Self {
            baselines: default_baselines(),
            camera: CameraSpec::default(),
            sweep: RangeSweep::default(),
        }
    }
}

fn default_baselines() -> Vec<Real> {
    vec![8.0, 12.0, 16.0]
}

/// Result of [`run_overlap_study`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapStudyReport {
    /// Input the report was computed from.
    pub input: OverlapStudyInput,
    /// One entry per baseline, in input order.
    pub results: Vec<BaselineResult>,
    /// Formatted parameter table.
    pub table: ParameterTable,
}

impl OverlapStudyReport {
    /// Ranges (m) at which the target fills the narrower FOV, per baseline.
    ///
    /// Identical for every baseline; plotted as reference markers.
    pub fn full_fill_markers(&self) -> Vec<(Real, Real)> {
        self.results
            .iter()
            .map(|r| (r.baseline_in, r.params.range_at_fill_100))
            .collect()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize overlap report")
    }
}

/// Compute camera parameters and overlap curves for every baseline of
/// `input`.
///
/// The whole input is validated before any curve is computed; on error no
/// report is produced.
pub fn run_overlap_study(input: &OverlapStudyInput) -> Result<OverlapStudyReport> {
    ensure!(
        !input.baselines.is_empty(),
        "enter one or more positive baseline(s)"
    );
    if let Err(err) = input.sweep.validate() {
        let message = match err.field() {
            "range_min" => "min range must be positive",
            _ => "max range must be greater than min range",
        };
        return Err(anyhow::Error::new(err).context(message));
    }

    let results = compute_for_baselines(&input.baselines, &input.camera, &input.sweep)
        .context("overlap computation failed")?;
    let table = ParameterTable::from_results(&results);

    info!(
        "overlap study: {} baseline(s), {} sweep {}..{} m",
        results.len(),
        input.sweep.scale,
        input.sweep.min,
        input.sweep.max
    );

    Ok(OverlapStudyReport {
        input: input.clone(),
        results,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stereo_overlap_core::{GeometryError, RangeScale, OVERLAP_SAMPLES};

    #[test]
    fn default_study_runs() {
        let report = run_overlap_study(&OverlapStudyInput::default()).unwrap();
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.table.headers.len(), 4);
        for r in &report.results {
            assert_eq!(r.curve.len(), OVERLAP_SAMPLES);
        }
        let markers = report.full_fill_markers();
        assert_eq!(markers.len(), 3);
        assert!(markers.iter().all(|&(_, m)| (m - 1.458_333).abs() < 1e-6));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let json = r#"{ "baselines": [4.0], "sweep": { "min": 1.0, "max": 50.0 } }"#;
        let input: OverlapStudyInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.baselines, vec![4.0]);
        assert_eq!(input.camera, CameraSpec::default());
        assert_eq!(input.sweep.scale, RangeScale::Linear);

        let empty: OverlapStudyInput = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, OverlapStudyInput::default());
    }

    #[test]
    fn inverted_sweep_is_reported_with_context() {
        let input = OverlapStudyInput {
            sweep: RangeSweep::new(1000.0, 10.0, RangeScale::Linear),
            ..OverlapStudyInput::default()
        };
        let err = run_overlap_study(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "max range must be greater than min range"
        );
        let cause = err.downcast_ref::<GeometryError>().unwrap();
        assert_eq!(cause.field(), "range_max");
    }

    #[test]
    fn non_positive_min_range_is_named() {
        let input = OverlapStudyInput {
            sweep: RangeSweep::new(0.0, 10.0, RangeScale::Logarithmic),
            ..OverlapStudyInput::default()
        };
        let err = run_overlap_study(&input).unwrap_err();
        assert_eq!(err.to_string(), "min range must be positive");
        assert_eq!(
            err.downcast_ref::<GeometryError>().map(GeometryError::field),
            Some("range_min")
        );
    }

    #[test]
    fn bad_baseline_keeps_typed_cause() {
        let input = OverlapStudyInput {
            baselines: vec![8.0, -2.0],
            ..OverlapStudyInput::default()
        };
        let err = run_overlap_study(&input).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeometryError>(),
            Some(&GeometryError::InvalidBaseline {
                index: 1,
                value: -2.0
            })
        );
    }

    #[test]
    fn empty_baselines_rejected() {
        let input = OverlapStudyInput {
            baselines: Vec::new(),
            ..OverlapStudyInput::default()
        };
        assert!(run_overlap_study(&input).is_err());
    }

    #[test]
    fn report_roundtrips_through_json() {
        let report = run_overlap_study(&OverlapStudyInput::default()).unwrap();
        let json = report.to_json_pretty().unwrap();
        let restored: OverlapStudyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.table, report.table);
        assert_eq!(restored.results.len(), report.results.len());
    }
}

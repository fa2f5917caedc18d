//! Per-baseline parameter table.
//!
//! One column per baseline, one row per reported quantity. Angular
//! resolution rows keep six significant digits; everything else is shown
//! with two decimals.

use serde::{Deserialize, Serialize};
use stereo_overlap_core::{BaselineResult, CameraParams, Real};

use crate::baseline_label;

/// Header of the label column.
pub const PARAMETER_HEADER: &str = "Parameter";

/// Quantities reported per baseline, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRow {
    Baseline,
    FocalLength,
    FovWidth,
    FovHeight,
    IfovDeg,
    IfovUrad,
    RangeFill90,
    RangeFill95,
    RangeFill100,
}

impl TableRow {
    pub const ALL: [TableRow; 9] = [
        TableRow::Baseline,
        TableRow::FocalLength,
        TableRow::FovWidth,
        TableRow::FovHeight,
        TableRow::IfovDeg,
        TableRow::IfovUrad,
        TableRow::RangeFill90,
        TableRow::RangeFill95,
        TableRow::RangeFill100,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TableRow::Baseline => "Baseline (in)",
            TableRow::FocalLength => "Focal Length (mm)",
            TableRow::FovWidth => "W FOV (deg)",
            TableRow::FovHeight => "H FOV (deg)",
            TableRow::IfovDeg => "iFOV (deg/pixel)",
            TableRow::IfovUrad => "iFOV (urad/pixel)",
            TableRow::RangeFill90 => "Range (90% fill, m)",
            TableRow::RangeFill95 => "Range (95% fill, m)",
            TableRow::RangeFill100 => "Range (100% fill, m)",
        }
    }

    pub fn value(self, p: &CameraParams) -> Real {
        match self {
            TableRow::Baseline => p.baseline_in,
            TableRow::FocalLength => p.camera.focal_length_mm,
            TableRow::FovWidth => p.fov_width_deg,
            TableRow::FovHeight => p.fov_height_deg,
            TableRow::IfovDeg => p.ifov_deg,
            TableRow::IfovUrad => p.ifov_urad,
            TableRow::RangeFill90 => p.range_at_fill_90,
            TableRow::RangeFill95 => p.range_at_fill_95,
            TableRow::RangeFill100 => p.range_at_fill_100,
        }
    }

    /// Render a value for this row.
    pub fn format(self, value: Real) -> String {
        match self {
            TableRow::IfovDeg | TableRow::IfovUrad => format_general(value, 6),
            _ => format!("{value:.2}"),
        }
    }
}

/// A labelled row of formatted cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRow {
    pub label: String,
    pub values: Vec<String>,
}

/// Formatted camera parameters, one column per baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterTable {
    /// `Parameter` followed by one label per baseline.
    pub headers: Vec<String>,
    pub rows: Vec<ParameterRow>,
}

impl ParameterTable {
    pub fn from_results(results: &[BaselineResult]) -> Self {
        let params: Vec<&CameraParams> = results.iter().map(|r| &r.params).collect();
        Self::from_params(&params)
    }

    pub fn from_params(params: &[&CameraParams]) -> Self {
        let headers = std::iter::once(PARAMETER_HEADER.to_string())
            .chain(params.iter().map(|p| baseline_label(p.baseline_in)))
            .collect();
        let rows = TableRow::ALL
            .iter()
            .map(|&row| ParameterRow {
                label: row.label().to_string(),
                values: params.iter().map(|p| row.format(row.value(p))).collect(),
            })
            .collect();
        Self { headers, rows }
    }

    /// Rows with the label prepended, ready for CSV output.
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().map(|row| {
            std::iter::once(row.label.clone())
                .chain(row.values.iter().cloned())
                .collect()
        })
    }

    /// Cell lookup by row label and baseline column index.
    pub fn cell(&self, label: &str, column: usize) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .and_then(|r| r.values.get(column))
            .map(String::as_str)
    }
}

/// Format `value` with `precision` significant digits in the style of C's
/// `%g`: fixed notation for moderate exponents, scientific otherwise, with
/// trailing zeros removed.
pub fn format_general(value: Real, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stereo_overlap_core::{compute_for_baselines, CameraSpec, RangeSweep};

    #[test]
    fn general_format_matches_printf() {
        assert_eq!(format_general(0.0306941668, 6), "0.0306942");
        assert_eq!(format_general(535.7142729, 6), "535.714");
        assert_eq!(format_general(1.0, 6), "1");
        assert_eq!(format_general(123456.0, 6), "123456");
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(0.0001, 6), "0.0001");
        assert_eq!(format_general(0.00001234, 6), "1.234e-05");
        assert_eq!(format_general(-2.5, 6), "-2.5");
    }

    #[test]
    fn table_layout() {
        let results = compute_for_baselines(
            &[8.0, 16.0],
            &CameraSpec::default(),
            &RangeSweep::default(),
        )
        .unwrap();
        let table = ParameterTable::from_results(&results);
        assert_eq!(table.headers, vec!["Parameter", "8.0\"", "16.0\""]);
        assert_eq!(table.rows.len(), 9);
        assert_eq!(table.rows[0].label, "Baseline (in)");
        assert_eq!(table.rows[8].label, "Range (100% fill, m)");

        assert_eq!(table.cell("Baseline (in)", 1), Some("16.00"));
        assert_eq!(table.cell("Focal Length (mm)", 0), Some("35.00"));
        assert_eq!(table.cell("W FOV (deg)", 0), Some("54.43"));
        assert_eq!(table.cell("H FOV (deg)", 0), Some("37.85"));
        assert_eq!(table.cell("iFOV (deg/pixel)", 0), Some("0.0306942"));
        assert_eq!(table.cell("iFOV (urad/pixel)", 0), Some("535.714"));
        assert_eq!(table.cell("Range (100% fill, m)", 0), Some("1.46"));
        assert_eq!(table.cell("Range (90% fill, m)", 1), Some("1.63"));
        assert_eq!(table.cell("nope", 0), None);
    }

    #[test]
    fn records_prepend_labels() {
        let results =
            compute_for_baselines(&[8.0], &CameraSpec::default(), &RangeSweep::default())
                .unwrap();
        let table = ParameterTable::from_results(&results);
        let records: Vec<Vec<String>> = table.records().collect();
        assert_eq!(records.len(), 9);
        assert_eq!(records[0], vec!["Baseline (in)", "8.00"]);
    }
}

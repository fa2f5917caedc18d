use approx::assert_relative_eq;
use std::fs;
use stereo_overlap_pipeline::{
    engine::{RangeScale, RangeSweep, OVERLAP_SAMPLES},
    parse_baselines, run_overlap_study, save_curves_csv, save_table_csv, OverlapStudyInput,
};
use tempfile::tempdir;

#[test]
fn logarithmic_study_exports_both_csv_files() {
    let input = OverlapStudyInput {
        baselines: parse_baselines("8,16").unwrap(),
        sweep: RangeSweep::new(10.0, 1000.0, RangeScale::Logarithmic),
        ..OverlapStudyInput::default()
    };
    let report = run_overlap_study(&input).unwrap();

    let dir = tempdir().unwrap();
    let table_path = dir.path().join("table.csv");
    let curves_path = dir.path().join("curves.csv");
    save_table_csv(&report.table, &table_path).unwrap();
    save_curves_csv(&report.results, &curves_path).unwrap();

    let table = fs::read_to_string(&table_path).unwrap();
    assert_eq!(table.lines().count(), 10);
    assert!(table.contains("iFOV (urad/pixel),535.714,535.714"));

    let curves = fs::read_to_string(&curves_path).unwrap();
    assert_eq!(curves.lines().count(), 1 + 2 * OVERLAP_SAMPLES);

    let first = &report.results[0].curve;
    assert_relative_eq!(first.ranges[0], 10.0, max_relative = 1e-12);
    assert_relative_eq!(first.ranges[OVERLAP_SAMPLES - 1], 1000.0, max_relative = 1e-12);
}

#[test]
fn failed_study_leaves_no_report() {
    let input = OverlapStudyInput {
        sweep: RangeSweep::new(50.0, 50.0, RangeScale::Linear),
        ..OverlapStudyInput::default()
    };
    assert!(run_overlap_study(&input).is_err());
}

#[test]
fn save_into_missing_directory_fails_with_path() {
    let report = run_overlap_study(&OverlapStudyInput::default()).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("table.csv");
    let err = save_table_csv(&report.table, &path).unwrap_err();
    assert!(err.to_string().contains("table.csv"), "{err}");
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use stereo_overlap_core::{RangeScale, Real};
use stereo_overlap_pipeline::{
    parse_baselines, run_overlap_study, save_curves_csv, save_table_csv, OverlapStudyInput,
    OverlapStudyReport,
};

/// Stereo camera field-of-view and overlap calculator.
///
/// Flags override the corresponding fields of `--input`; anything left
/// unset falls back to the built-in defaults.
#[derive(Debug, Parser)]
#[command(author, version, about = "Stereo camera FOV / overlap-vs-range calculator")]
struct Args {
    /// Path to JSON file containing an OverlapStudyInput.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Comma-separated stereo baselines in inches, e.g. "8,12,16".
    #[arg(long)]
    baselines: Option<String>,

    /// Lens focal length (mm).
    #[arg(long)]
    focal_length_mm: Option<Real>,

    /// Sensor width in pixels.
    #[arg(long)]
    pixel_width: Option<u32>,

    /// Sensor height in pixels.
    #[arg(long)]
    pixel_height: Option<u32>,

    /// Sensor (FPA) width (m).
    #[arg(long)]
    fpa_width_m: Option<Real>,

    /// Sensor (FPA) height (m).
    #[arg(long)]
    fpa_height_m: Option<Real>,

    /// Target size (m).
    #[arg(long)]
    target_size_m: Option<Real>,

    /// First range of the sweep (m).
    #[arg(long)]
    range_min: Option<Real>,

    /// Last range of the sweep (m).
    #[arg(long)]
    range_max: Option<Real>,

    /// Range sampling: linear or logarithmic.
    #[arg(long)]
    scale: Option<RangeScale>,

    /// Write the parameter table as CSV.
    #[arg(long)]
    table_csv: Option<PathBuf>,

    /// Write all overlap curves as CSV.
    #[arg(long)]
    curves_csv: Option<PathBuf>,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(value)
}

impl Args {
    fn study_input(&self) -> Result<OverlapStudyInput> {
        let mut input = match &self.input {
            Some(path) => load_json_file::<OverlapStudyInput>(path)?,
            None => OverlapStudyInput::default(),
        };

        if let Some(text) = &self.baselines {
            input.baselines = parse_baselines(text)?;
        }
        let camera = &mut input.camera;
        if let Some(v) = self.focal_length_mm {
            camera.focal_length_mm = v;
        }
        if let Some(v) = self.pixel_width {
            camera.pixel_width = v;
        }
        if let Some(v) = self.pixel_height {
            camera.pixel_height = v;
        }
        if let Some(v) = self.fpa_width_m {
            camera.fpa_width_m = v;
        }
        if let Some(v) = self.fpa_height_m {
            camera.fpa_height_m = v;
        }
        if let Some(v) = self.target_size_m {
            camera.target_size_m = v;
        }
        let sweep = &mut input.sweep;
        if let Some(v) = self.range_min {
            sweep.min = v;
        }
        if let Some(v) = self.range_max {
            sweep.max = v;
        }
        if let Some(v) = self.scale {
            sweep.scale = v;
        }
        Ok(input)
    }
}

fn run_overlap_study_from_args(args: &Args) -> Result<OverlapStudyReport> {
    let input = args.study_input()?;
    debug!("study input: {input:?}");
    run_overlap_study(&input)
}

/// Write the requested artifacts. Only called with a complete report.
fn write_outputs(args: &Args, report: &OverlapStudyReport) -> Result<()> {
    if let Some(path) = &args.table_csv {
        save_table_csv(&report.table, path)?;
    }
    if let Some(path) = &args.curves_csv {
        save_curves_csv(&report.results, path)?;
    }
    let json = report.to_json_pretty()?;
    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = try_main() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    let report = run_overlap_study_from_args(&args)?;
    write_outputs(&args, &report)
}

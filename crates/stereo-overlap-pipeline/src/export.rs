//! CSV export of study results.

use std::{fs::File, io, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use stereo_overlap_core::{BaselineResult, Real};

use crate::ParameterTable;

#[derive(Debug, Serialize)]
struct CurveRecord {
    baseline_in: Real,
    range_m: Real,
    overlap_percent: Real,
}

/// Write the parameter table: header row, then one row per parameter.
pub fn write_table_csv<W: io::Write>(table: &ParameterTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&table.headers)?;
    for record in table.records() {
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write every overlap curve in long format:
/// `baseline_in,range_m,overlap_percent`.
pub fn write_curves_csv<W: io::Write>(results: &[BaselineResult], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for result in results {
        for (range_m, overlap_percent) in result.curve.samples() {
            wtr.serialize(CurveRecord {
                baseline_in: result.baseline_in,
                range_m,
                overlap_percent,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_table_csv`] into a new file at `path`.
pub fn save_table_csv(table: &ParameterTable, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create table CSV {}", path.display()))?;
    write_table_csv(table, file)
        .with_context(|| format!("failed to write table CSV {}", path.display()))
}

/// [`write_curves_csv`] into a new file at `path`.
pub fn save_curves_csv(results: &[BaselineResult], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create curves CSV {}", path.display()))?;
    write_curves_csv(results, file)
        .with_context(|| format!("failed to write curves CSV {}", path.display()))
}

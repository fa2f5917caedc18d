//! Overlap studies on top of `stereo-overlap-core`.
//!
//! A study takes a serializable [`OverlapStudyInput`] (baselines, camera,
//! range sweep), runs the geometry engine once per baseline and returns an
//! [`OverlapStudyReport`] holding the raw curves plus a formatted
//! [`ParameterTable`]. Reports can be exported as JSON or CSV.
//!
//! ```
//! use stereo_overlap_pipeline::{parse_baselines, run_overlap_study, OverlapStudyInput};
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = OverlapStudyInput {
//!     baselines: parse_baselines("8, 12, 16")?,
//!     ..OverlapStudyInput::default()
//! };
//! let report = run_overlap_study(&input)?;
//! assert_eq!(report.table.headers.len(), 4);
//! # Ok(())
//! # }
//! ```

mod baselines;
mod export;
mod study;
mod table;

pub use baselines::{baseline_label, parse_baselines};
pub use export::{save_curves_csv, save_table_csv, write_curves_csv, write_table_csv};
pub use study::{run_overlap_study, OverlapStudyInput, OverlapStudyReport};
pub use table::{format_general, ParameterRow, ParameterTable, TableRow, PARAMETER_HEADER};

// Re-export the engine so front-ends need a single dependency.
pub use stereo_overlap_core as engine;

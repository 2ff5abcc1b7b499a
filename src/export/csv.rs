//! CSV export of the full lap set.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::laps::convert::distance_for;
use crate::laps::types::LapPlan;

/// Default file name for a CSV export.
pub const DEFAULT_CSV_FILENAME: &str = "hiit_laps.csv";

/// Header row of the export table.
pub const CSV_HEADER: &str = "lap,interval,duration_min,speed_kmh,distance_km";

/// Export every (lap, interval) pair of the plan as CSV.
///
/// Walks the full lap set regardless of any distance goal. Rows are joined
/// with `\n` and the output has no trailing newline.
pub fn export_csv(plan: &LapPlan) -> Result<String, ExportError> {
    let mut output = Vec::new();

    write!(output, "{}", CSV_HEADER).map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    for lap in 0..plan.effective_lap_count() {
        for (index, interval) in plan.lap_intervals(lap).iter().enumerate() {
            write!(
                output,
                "\n{},{},{},{},{:.6}",
                lap + 1,
                index + 1,
                interval.duration,
                interval.speed,
                distance_for(interval),
            )
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
        }
    }

    String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Export a plan to CSV and write it to a file.
pub fn export_csv_to_file(plan: &LapPlan, path: &Path) -> Result<(), ExportError> {
    let content = export_csv(plan)?;
    std::fs::write(path, content)?;
    tracing::info!("Exported lap table to {}", path.display());
    Ok(())
}

/// Errors during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to write export data
    #[error("Failed to write data: {0}")]
    WriteFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

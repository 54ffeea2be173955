use std::path::Path;

use tracing::info;

use crate::api::BatchReport;
use crate::error::Result;

/// Write a batch report as pretty-printed JSON.
pub fn write_report_json(report: &BatchReport, output: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(report)?;
    std::fs::write(output, json_string)?;
    info!("Wrote batch report: {:?}", output);
    Ok(())
}

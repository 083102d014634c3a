//! CSV report export
//!
//! Renders an hourly position as `PowerPosition_<yyyyMMdd>_<HHmm>.csv`: a
//! `Local Time,Volume` header and one row per present hour, rows ordered
//! from the trading-day start (23:00 first, then 00:00 through 22:00).
//! The filename pattern is a contract with downstream consumers; its
//! timestamp is wall-clock "now" in the market timezone at write time,
//! not the trading date.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use tracing::{debug, info};

use crate::aggregator::HourlyPosition;

/// Writes hourly position reports as CSV files
#[derive(Debug, Clone, Copy)]
pub struct ReportWriter {
    timezone: Tz,
}

impl ReportWriter {
    /// Create a writer stamping filenames in the given timezone
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Write the position to `output_dir`, returning the written path.
    ///
    /// The directory is created if missing. Content lands in a temporary
    /// file and is renamed into place, so no partial report is ever
    /// visible at the final path.
    pub fn write(&self, position: &HourlyPosition, output_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory {}", output_dir.display())
        })?;

        let now = Utc::now().with_timezone(&self.timezone);
        let filename = format!("PowerPosition_{}.csv", now.format("%Y%m%d_%H%M"));
        let path = output_dir.join(&filename);
        debug!("Generating report file {filename}");

        let tmp_path = output_dir.join(format!("{filename}.tmp"));
        if let Err(e) = fs::write(&tmp_path, render_csv(position)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e)
                .with_context(|| format!("Failed to write report to {}", tmp_path.display()));
        }
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to move report into place at {}", path.display()))?;

        info!(
            "Exported {} hourly volumes to {}",
            position.len(),
            path.display()
        );
        Ok(path)
    }
}

/// Render rows in trading-day order: hour 23 first, then 0..=22
fn render_csv(position: &HourlyPosition) -> String {
    let mut rows: Vec<(u32, f64)> = position.iter().collect();
    rows.sort_by_key(|&(hour, _)| (hour + 1) % 24);

    let mut out = String::from("Local Time,Volume\n");
    for (hour, volume) in rows {
        out.push_str(&format!("{hour:02}:00,{volume}\n"));
    }
    out
}

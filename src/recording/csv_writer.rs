//! CSV export of trial results.
//!
//! Format: `game,secret,attempts`, one row per replayed game, named by
//! run date so repeated runs land in distinct files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::recording::trial::TrialRecord;
use crate::Result;

/// Default report path inside `base_dir`: `trials_YYYYMMDD.csv`.
pub fn default_report_path<P: AsRef<Path>>(base_dir: P) -> PathBuf {
    let date = Utc::now().format("%Y%m%d");
    base_dir.as_ref().join(format!("trials_{date}.csv"))
}

/// Writes one row per trial, creating parent directories as needed.
pub fn write_report<P: AsRef<Path>>(path: P, records: &[TrialRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

//! Bundled backup dataset.
//!
//! The backup is a JSON object keyed by year, then by month, both as
//! decimal strings without padding:
//!
//! ```json
//! { "2025": { "3": [ { "date": 20250301, "name": "삼일절", "isHoliday": true,
//!                      "dateKind": "01", "dateKindName": "국경일", "seq": 1 } ] } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use hc_core::{MonthNumber, Year};
use hc_engine::HolidayRecord;

use crate::error::SourceError;
use crate::source::MonthSource;

type YearTable = BTreeMap<String, Vec<HolidayRecord>>;

/// Holiday records kept on disk for when the live API is not available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct BackupDataset {
    years: BTreeMap<String, YearTable>,
}

impl BackupDataset {
    /// Parse a backup from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        serde_json::from_str(json).map_err(|e| SourceError::Backup(e.to_string()))
    }

    /// Read and parse a backup file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SourceError::Backup(format!("{}: {e}", path.display())))?;
        let backup = Self::from_json_str(&json)?;
        info!(path = %path.display(), years = backup.years.len(), "loaded holiday backup");
        Ok(backup)
    }

    /// Years present in the backup, in ascending order.
    pub fn years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self.years.keys().filter_map(|y| y.parse().ok()).collect();
        years.sort_unstable();
        years
    }

    /// The public holidays of one month.
    ///
    /// Records flagged as not being a day off are dropped.
    pub fn month(&self, year: Year, month: MonthNumber) -> Result<Vec<HolidayRecord>, SourceError> {
        let records = self
            .years
            .get(&year.to_string())
            .and_then(|table| {
                table
                    .get(&month.to_string())
                    .or_else(|| table.get(&format!("{month:02}")))
            })
            .ok_or(SourceError::MonthDataMissing { year, month })?;
        Ok(records.iter().filter(|r| r.is_holiday).cloned().collect())
    }
}

impl MonthSource for BackupDataset {
    fn name(&self) -> &str {
        "backup"
    }

    async fn fetch_month(&self, year: Year, month: MonthNumber) -> Result<Vec<HolidayRecord>, SourceError> {
        let records = self.month(year, month)?;
        debug!(year, month, count = records.len(), "holidays served from backup");
        Ok(records)
    }
}

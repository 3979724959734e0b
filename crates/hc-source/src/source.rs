//! The `MonthSource` trait.

use std::future::Future;

use hc_core::{MonthNumber, Year};
use hc_engine::HolidayRecord;

use crate::error::SourceError;

/// A provider of the holiday records of one month.
///
/// Implementations return the public holidays only (records whose
/// `is_holiday` flag is set), in source order.
pub trait MonthSource: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Fetch the records of `month` (1–12) of `year`.
    fn fetch_month(
        &self,
        year: Year,
        month: MonthNumber,
    ) -> impl Future<Output = Result<Vec<HolidayRecord>, SourceError>> + Send;
}

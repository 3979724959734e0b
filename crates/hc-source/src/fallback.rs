//! Live source with backup fallback.

use tracing::{debug, warn};

use hc_core::{MonthNumber, Year};
use hc_engine::HolidayRecord;

use crate::api::PublicHolidayApi;
use crate::backup::BackupDataset;
use crate::error::SourceError;
use crate::source::MonthSource;

/// A primary source backed by a secondary one.
///
/// Without a primary (no API key configured) every request goes to the
/// backup. A primary failure that [`SourceError::is_recoverable`] is logged
/// and answered by the backup; any other primary error is returned as is.
#[derive(Debug, Clone)]
pub struct FallbackSource<P = PublicHolidayApi, B = BackupDataset> {
    primary: Option<P>,
    backup: B,
}

impl<P, B> FallbackSource<P, B> {
    /// Combine an optional primary with a backup.
    pub fn new(primary: Option<P>, backup: B) -> Self {
        Self { primary, backup }
    }

    /// Serve everything from the backup.
    pub fn backup_only(backup: B) -> Self {
        Self {
            primary: None,
            backup,
        }
    }

    /// Return `true` if a primary source is configured.
    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }
}

impl<P: MonthSource, B: MonthSource> MonthSource for FallbackSource<P, B> {
    fn name(&self) -> &str {
        match &self.primary {
            Some(primary) => primary.name(),
            None => self.backup.name(),
        }
    }

    async fn fetch_month(&self, year: Year, month: MonthNumber) -> Result<Vec<HolidayRecord>, SourceError> {
        let Some(primary) = &self.primary else {
            debug!(year, month, "no live source configured, using backup");
            return self.backup.fetch_month(year, month).await;
        };
        match primary.fetch_month(year, month).await {
            Err(e) if e.is_recoverable() => {
                warn!(
                    source = primary.name(),
                    year,
                    month,
                    error = %e,
                    "live holiday source failed, using backup"
                );
                self.backup.fetch_month(year, month).await
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_engine::DateKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Scripted {
        reply: Result<Vec<HolidayRecord>, SourceError>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(reply: Result<Vec<HolidayRecord>, SourceError>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl MonthSource for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn fetch_month(&self, _year: Year, _month: MonthNumber) -> Result<Vec<HolidayRecord>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn backup() -> Scripted {
        Scripted::new(Ok(vec![HolidayRecord::new(20250815, "광복절", DateKind::National)]))
    }

    #[tokio::test]
    async fn no_primary_uses_backup() {
        let source: FallbackSource<Scripted, Scripted> = FallbackSource::backup_only(backup());
        let records = source.fetch_month(2025, 8).await.unwrap();
        assert_eq!(records[0].name, "광복절");
        assert!(!source.has_primary());
    }

    #[tokio::test]
    async fn unavailable_primary_is_recovered() {
        let primary = Scripted::new(Err(SourceError::Unavailable("connection refused".into())));
        let source = FallbackSource::new(Some(primary), backup());
        let records = source.fetch_month(2025, 8).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(source.backup.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rejection_is_surfaced() {
        let rejected = SourceError::Rejected {
            code: "22".into(),
            message: "LIMITED_NUMBER_OF_SERVICE_REQUESTS_EXCEEDS_ERROR".into(),
        };
        let source = FallbackSource::new(Some(Scripted::new(Err(rejected.clone()))), backup());
        assert_eq!(source.fetch_month(2025, 8).await, Err(rejected));
        assert_eq!(source.backup.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn primary_success_skips_backup() {
        let primary = Scripted::new(Ok(Vec::new()));
        let source = FallbackSource::new(Some(primary), backup());
        assert!(source.fetch_month(2025, 2).await.unwrap().is_empty());
        assert_eq!(source.backup.calls.load(Ordering::SeqCst), 0);
    }
}

//! Concurrent fetching of a whole year.

use futures::future::join_all;
use tracing::{debug, info};

use hc_core::Year;
use hc_engine::{aggregate, AggregateError, HolidayRecord, Language, NameTable, PeriodRules, YearDataset};

use crate::error::SourceError;
use crate::source::MonthSource;

/// Fetch the twelve months of `year` concurrently.
///
/// The results are in month order, January first, whatever order the
/// requests complete in.
pub async fn fetch_year<S: MonthSource>(source: &S, year: Year) -> Vec<Result<Vec<HolidayRecord>, SourceError>> {
    debug!(source = source.name(), year, "fetching holiday year");
    let results = join_all((1..=12).map(|month| source.fetch_month(year, month))).await;
    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(source = source.name(), year, failed, "fetched holiday year");
    results
}

/// Fetch `year` and aggregate it for display in `language`.
pub async fn fetch_dataset<S: MonthSource>(
    source: &S,
    year: Year,
    language: Language,
    names: &NameTable,
    rules: &PeriodRules,
) -> Result<YearDataset, AggregateError> {
    let results = fetch_year(source, year).await;
    aggregate(year, results, language, names, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::BackupDataset;

    const BACKUP: &str = r#"{"2025": {
        "1": [{"date": 20250101, "name": "1월1일", "dateKind": "01"}],
        "2": [], "3": [], "4": [], "5": [], "6": [],
        "7": [], "8": [], "9": [], "10": [], "11": [],
        "12": [{"date": 20251225, "name": "기독탄신일", "dateKind": "01"}]
    }}"#;

    #[tokio::test]
    async fn results_are_in_month_order() {
        let backup = BackupDataset::from_json_str(BACKUP).unwrap();
        let results = fetch_year(&backup, 2025).await;
        assert_eq!(results.len(), 12);
        assert_eq!(results[0].as_ref().unwrap()[0].date, 20250101);
        assert_eq!(results[11].as_ref().unwrap()[0].date, 20251225);
    }

    #[tokio::test]
    async fn missing_month_fails_the_year() {
        let backup = BackupDataset::from_json_str(BACKUP).unwrap();
        let err = fetch_dataset(&backup, 2026, Language::Ko, &NameTable::builtin(), &PeriodRules::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "백업 데이터에 2026년 1월 공휴일 정보가 없습니다.");
    }

    #[tokio::test]
    async fn dataset_from_backup() {
        let backup = BackupDataset::from_json_str(BACKUP).unwrap();
        let ds = fetch_dataset(&backup, 2025, Language::En, &NameTable::builtin(), &PeriodRules::default())
            .await
            .unwrap();
        assert_eq!(ds.total_holidays, 2);
        assert_eq!(ds.month(12).unwrap().holidays[0].record.name, "Christmas Day");
        assert_eq!(ds.total_days_off, 104 + 2);
    }
}

//! Controller flows over a backup-only source.

use hc_engine::{Language, NameTable, PeriodRules};
use hc_source::{fetch_dataset, BackupDataset, CalendarController, FallbackSource, PublicHolidayApi};

fn backup() -> BackupDataset {
    let month = |records: &str| format!("[{records}]");
    let mut months = Vec::new();
    for m in 1..=12 {
        let records = match m {
            5 => month(
                r#"{"date": 20250505, "name": "어린이날", "dateKind": "01", "dateKindName": "국경일"},
                   {"date": 20250505, "name": "부처님오신날", "dateKind": "01", "dateKindName": "국경일"},
                   {"date": 20250506, "name": "대체공휴일", "dateKind": "01", "dateKindName": "국경일"}"#,
            ),
            8 => month(r#"{"date": 20250815, "name": "광복절", "dateKind": "01", "dateKindName": "국경일"}"#),
            _ => month(""),
        };
        months.push(format!("\"{m}\": {records}"));
    }
    let json = format!("{{\"2025\": {{{}}}}}", months.join(","));
    BackupDataset::from_json_str(&json).unwrap()
}

#[tokio::test]
async fn load_applies_dataset() {
    let source: FallbackSource<PublicHolidayApi, BackupDataset> = FallbackSource::backup_only(backup());
    let mut controller = CalendarController::new(2025, Language::Ko);
    let state = controller
        .load(&source, 2025, Language::En, &NameTable::builtin(), &PeriodRules::default())
        .await;
    assert!(!state.loading);
    assert_eq!(state.error, None);
    let ds = state.dataset.as_ref().unwrap();
    assert_eq!(ds.language, Language::En);
    assert_eq!(ds.total_holidays, 4);
    assert_eq!(ds.total_days_off, 104 + 4);
    assert_eq!(ds.month(5).unwrap().holidays[2].record.name, "Substitute Holiday");
}

#[tokio::test]
async fn missing_year_sets_error() {
    let source: FallbackSource<PublicHolidayApi, BackupDataset> = FallbackSource::backup_only(backup());
    let mut controller = CalendarController::new(2025, Language::Ko);
    let state = controller
        .load(&source, 2027, Language::Ko, &NameTable::builtin(), &PeriodRules::default())
        .await;
    assert_eq!(
        state.error.as_deref(),
        Some("백업 데이터에 2027년 1월 공휴일 정보가 없습니다.")
    );
    assert!(state.dataset.is_none());
}

#[tokio::test]
async fn late_completion_of_superseded_request_is_dropped() {
    let source = backup();
    let names = NameTable::builtin();
    let rules = PeriodRules::default();
    let mut controller = CalendarController::new(2025, Language::Ko);

    // Korean request issued, then the user switches to English
    let ko = controller.begin(2025, Language::Ko);
    let en = controller.begin(2025, Language::En);

    let en_result = fetch_dataset(&source, en.year(), en.language(), &names, &rules).await;
    let ko_result = fetch_dataset(&source, ko.year(), ko.language(), &names, &rules).await;

    assert!(controller.finish(en, en_result));
    assert!(!controller.finish(ko, ko_result));

    let state = controller.state();
    assert_eq!(state.language, Language::En);
    assert_eq!(state.dataset.as_ref().unwrap().language, Language::En);
}

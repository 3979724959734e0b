//! Wiring of configuration, sources and bundled data.

use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use hc_engine::{EngineError, EventBook, Language, Message, NameTable};
use hc_source::{BackupDataset, FallbackSource, PublicHolidayApi, SourceError};

use crate::config::{AppConfig, ConfigError};

/// Backup bundled into the binary.
pub const BUNDLED_BACKUP: &str = include_str!("../data/backup-holidays.json");

const BUNDLED_EVENTS_KO: &str = include_str!("../data/major-events-ko.json");
const BUNDLED_EVENTS_EN: &str = include_str!("../data/major-events-en.json");

/// Errors of the `holical` application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A data source could not be set up.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A name table or event book is invalid.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A date is out of range.
    #[error(transparent)]
    Date(#[from] hc_core::Error),

    /// An input file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Output serialization failed.
    #[error("cannot serialize output: {0}")]
    Output(#[from] serde_json::Error),

    /// Loading the selected year failed.
    #[error("{0}")]
    Load(String),
}

impl AppError {
    /// The message shown to the user in `language`.
    ///
    /// An unreadable backup is reported with the generic fetch failure text;
    /// its details go to the log.
    pub fn user_message(&self, language: Language) -> String {
        match self {
            AppError::Source(SourceError::Backup(_)) => Message::ErrorMessage.render(language),
            other => other.to_string(),
        }
    }
}

async fn read_file(path: &Path) -> Result<String, AppError> {
    tokio::fs::read_to_string(path).await.map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// The configured backup, or the bundled one.
pub async fn load_backup(config: &AppConfig) -> Result<BackupDataset, AppError> {
    match &config.source.backup_path {
        Some(path) => Ok(BackupDataset::load(path).await?),
        None => {
            debug!("using bundled holiday backup");
            Ok(BackupDataset::from_json_str(BUNDLED_BACKUP)?)
        }
    }
}

/// The live API backed by the backup, or the backup alone without a key.
pub async fn build_source(config: &AppConfig) -> Result<FallbackSource, AppError> {
    let backup = load_backup(config).await?;
    let Some(key) = config.api_key() else {
        info!("no service key configured, serving holidays from the backup");
        return Ok(FallbackSource::backup_only(backup));
    };
    let api = PublicHolidayApi::new(
        key,
        config.source.endpoint.clone(),
        Duration::from_secs(config.source.timeout_secs),
        config.source.rows_per_page,
    )?;
    info!(endpoint = %config.source.endpoint, "serving holidays from the public-data API");
    Ok(FallbackSource::new(Some(api), backup))
}

/// The built-in name table, with the configured table merged over it.
pub async fn load_names(config: &AppConfig) -> Result<NameTable, AppError> {
    let mut names = NameTable::builtin();
    if let Some(path) = &config.display.names_path {
        names.merge(NameTable::from_json_str(&read_file(path).await?)?);
        debug!(path = %path.display(), "merged holiday name table");
    }
    Ok(names)
}

/// The event book of `language`, from the configured directory or bundled.
pub async fn load_events(config: &AppConfig, language: Language) -> Result<EventBook, AppError> {
    let json = match &config.display.events_dir {
        Some(dir) => read_file(&dir.join(format!("major-events-{}.json", language.code()))).await?,
        None => match language {
            Language::Ko => BUNDLED_EVENTS_KO.to_string(),
            Language::En => BUNDLED_EVENTS_EN.to_string(),
        },
    };
    Ok(EventBook::from_json_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_source::MonthSource;

    #[test]
    fn bundled_data_parses() {
        let backup = BackupDataset::from_json_str(BUNDLED_BACKUP).unwrap();
        assert_eq!(backup.years(), [2024, 2025, 2026]);
        assert!(EventBook::from_json_str(BUNDLED_EVENTS_KO).unwrap().year_count() >= 3);
        assert!(EventBook::from_json_str(BUNDLED_EVENTS_EN).unwrap().year_count() >= 3);
    }

    #[tokio::test]
    async fn no_key_means_backup_only() {
        let source = build_source(&AppConfig::default()).await.unwrap();
        assert!(!source.has_primary());
        let march = source.fetch_month(2025, 3).await.unwrap();
        assert_eq!(march.len(), 2);
    }

    #[tokio::test]
    async fn missing_names_file_is_reported() {
        let mut config = AppConfig::default();
        config.display.names_path = Some("/nonexistent/names.json".into());
        assert!(matches!(load_names(&config).await, Err(AppError::Io { .. })));
    }

    #[tokio::test]
    async fn unreadable_backup_shows_generic_message() {
        let mut config = AppConfig::default();
        config.source.backup_path = Some("/nonexistent/backup.json".into());
        let err = build_source(&config).await.unwrap_err();
        assert!(matches!(err, AppError::Source(SourceError::Backup(_))));
        assert_eq!(err.user_message(Language::Ko), "공휴일 정보를 가져오는 중 오류가 발생했습니다.");
        assert_eq!(err.user_message(Language::En), "An error occurred while fetching holiday information.");
    }

    #[test]
    fn other_errors_keep_their_text() {
        let err = AppError::Load("백업 데이터에 2030년 1월 공휴일 정보가 없습니다.".into());
        assert_eq!(err.user_message(Language::En), "백업 데이터에 2030년 1월 공휴일 정보가 없습니다.");
    }

    #[tokio::test]
    async fn bundled_events_per_language() {
        let config = AppConfig::default();
        let en = load_events(&config, Language::En).await.unwrap().events_for(2025);
        let ko = load_events(&config, Language::Ko).await.unwrap().events_for(2025);
        assert_eq!(en.len(), ko.len());
        assert_eq!(en[0].date, "2025");
    }
}

//! Source errors.

use thiserror::Error;

use hc_core::{MonthNumber, Year};

/// Errors produced while fetching the holidays of one month.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The live API could not be reached or answered with something that
    /// is not a holiday response (transport failure, HTTP status, parse
    /// error). Recovered by the backup when one is configured.
    #[error("holiday API unavailable: {0}")]
    Unavailable(String),

    /// The backup dataset has no entry for the month.
    #[error("백업 데이터에 {year}년 {month}월 공휴일 정보가 없습니다.")]
    MonthDataMissing {
        /// Requested year.
        year: Year,
        /// Requested month (1–12).
        month: MonthNumber,
    },

    /// The API answered with a result code other than `00`.
    #[error("{message}")]
    Rejected {
        /// Result code reported by the API.
        code: String,
        /// Result message reported by the API.
        message: String,
    },

    /// The backup file could not be read or parsed.
    #[error("backup data unreadable: {0}")]
    Backup(String),
}

impl SourceError {
    /// Return `true` if a fallback source may be tried instead.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SourceError::Unavailable(_))
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        SourceError::Unavailable(e.to_string())
    }
}

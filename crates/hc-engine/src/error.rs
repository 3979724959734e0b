//! Engine errors.

use thiserror::Error;

/// Errors raised while loading engine inputs (name tables, event books).
#[derive(Debug, Error)]
pub enum EngineError {
    /// A JSON document could not be parsed.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

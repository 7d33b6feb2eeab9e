//! Error types for the siem-migrate crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MigrateError>;

/// Errors produced while building rewrite passes or loading reference data.
///
/// Query translation and coverage scoring themselves never fail: translation
/// signals "no result" with `None` and scoring degrades to an empty match
/// list. The fallible surface is limited to compiling rewrite patterns and
/// loading the analytic catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MigrateError {
    #[error("invalid rewrite pattern: {0}")]
    InvalidPattern(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("catalog parse error: {0}")]
    CatalogParse(String),
}

impl From<std::io::Error> for MigrateError {
    fn from(err: std::io::Error) -> Self {
        MigrateError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MigrateError {
    fn from(err: serde_json::Error) -> Self {
        MigrateError::CatalogParse(err.to_string())
    }
}

impl From<regex::Error> for MigrateError {
    fn from(err: regex::Error) -> Self {
        MigrateError::InvalidPattern(err.to_string())
    }
}

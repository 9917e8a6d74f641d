//! Error types raised by plan repositories.

use leveling_core::{ErrorSeverity, LevelingError};
use thiserror::Error;

use crate::migrate::MigrationError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("plan repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("migration failed: {0}")]
    Migration(#[from] MigrationError),

    #[error("plan not found: {0}")]
    NotFound(String),

    #[error("invalid plan name: {0:?}")]
    InvalidName(String),
}

impl LevelingError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) | Self::InvalidName(_) | Self::Migration(_) => {
                ErrorSeverity::Validation
            }
            Self::LockPoisoned | Self::Io(_) | Self::Json(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            Self::Io(_) => "REPOSITORY_IO",
            Self::Json(_) => "REPOSITORY_JSON",
            Self::Migration(_) => "REPOSITORY_MIGRATION",
            Self::NotFound(_) => "REPOSITORY_NOT_FOUND",
            Self::InvalidName(_) => "REPOSITORY_INVALID_NAME",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Plan names become file names, so they must be a single plain component.
pub(crate) fn check_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | ' ' | '.'));
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidName(name.to_owned()))
    }
}

//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The directory the project should be created in is missing.
    #[error("Output directory {path} does not exist or is not a directory")]
    OutputRootMissing { path: PathBuf },

    /// Adapter state lock was poisoned.
    #[error("Adapter lock poisoned: {name}")]
    LockPoisoned { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::OutputRootMissing { path } => vec![
                format!("Create it first: mkdir -p {}", path.display()),
                "Or pass an existing directory with --output".into(),
            ],
            Self::RenderingFailed { reason } => vec![
                format!("Rendering failed: {}", reason),
                "Try a project name without quotes or control characters".into(),
            ],
            Self::LockPoisoned { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::OutputRootMissing { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } | Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}

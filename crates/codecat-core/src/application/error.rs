//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.
//!
//! A read failure on an individual source file is deliberately NOT an error
//! variant here: it is recovered inside the collect loop and surfaced as an
//! inline marker record in the bundle.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The walk over the source tree failed as a whole.
    #[error("Walk failed under {root}: {reason}")]
    Walk { root: PathBuf, reason: String },

    /// The output bundle could not be created. Fatal: the run aborts.
    #[error("Cannot open output {path}: {reason}")]
    SinkCreation { path: PathBuf, reason: String },

    /// A write to the already-open bundle failed. Fatal: the run aborts,
    /// leaving a partial output file behind (no atomicity guarantee).
    #[error("Write to {path} failed: {reason}")]
    SinkWrite { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Walk { root, .. } => vec![
                format!("Failed to enumerate: {}", root.display()),
                "Check that the directory exists and is readable".into(),
            ],
            Self::SinkCreation { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::SinkWrite { path, .. } => vec![
                format!("Failed while writing: {}", path.display()),
                "Check available disk space".into(),
                "The output file may be incomplete".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Walk { .. } => ErrorCategory::Io,
            Self::SinkCreation { .. } | Self::SinkWrite { .. } => ErrorCategory::Io,
        }
    }
}

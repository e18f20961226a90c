use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid extension '{extension}': extensions must start with '.'")]
    InvalidExtension { extension: String },

    #[error("Extension set is empty")]
    EmptyExtensionSet,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidExtension { extension } => vec![
                format!("'{}' is not a valid extension", extension),
                "Extensions are dotted suffixes, e.g. '.cs' or '.dart'".into(),
            ],
            Self::EmptyExtensionSet => vec![
                "At least one extension is required".into(),
                "Use CollectionFilter::default() for the built-in set".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidExtension { .. } | Self::EmptyExtensionSet => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

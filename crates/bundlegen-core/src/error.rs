//! Unified error handling for Bundlegen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Bundlegen Core operations.
#[derive(Debug, Error, Clone)]
pub enum BundlegenError {
    /// Errors from the domain layer (business rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and I/O failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl BundlegenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in bundlegen".into(),
                "Please report this issue at: https://github.com/bundlegen/bundlegen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the identifier was already imported into the routing file.
    pub fn is_duplicate_import(&self) -> bool {
        matches!(self, Self::Domain(DomainError::DuplicateImport { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type BundlegenResult<T> = Result<T, BundlegenError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> BundlegenResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> BundlegenResult<T> {
        self.map_err(|e| BundlegenError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn duplicate_import_is_a_conflict() {
        let err: BundlegenError = DomainError::DuplicateImport {
            identifier: "AcmeBlogBundle".into(),
        }
        .into();

        assert!(err.is_duplicate_import());
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(err.to_string(), r#"Bundle "AcmeBlogBundle" is already imported."#);
    }

    #[test]
    fn filesystem_error_is_internal() {
        let err: BundlegenError = ApplicationError::FilesystemError {
            path: PathBuf::from("/etc/routes.yaml"),
            reason: "permission denied".into(),
        }
        .into();

        assert!(!err.is_duplicate_import());
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn context_wraps_foreign_errors() {
        let raw: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = raw.context("formatting block").unwrap_err();
        assert!(matches!(err, BundlegenError::Internal { .. }));
        assert!(err.to_string().starts_with("Internal error: formatting block"));
    }
}

// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so callers can report and keep them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid bundle namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    #[error("Invalid bundle name '{name}': {reason}")]
    InvalidBundleName { name: String, reason: String },

    #[error("Invalid format '{format}'")]
    InvalidFormat { format: String },

    #[error("Invalid flavor '{flavor}'")]
    InvalidFlavor { flavor: String },

    #[error("Invalid import identifier: {reason}")]
    InvalidIdentifier { reason: String },

    #[error(
        "Unable to generate the bundle as the target directory \"{}\" exists but is a file.",
        path.display()
    )]
    TargetIsFile { path: PathBuf },

    #[error(
        "Unable to generate the bundle as the target directory \"{}\" is not empty.",
        path.display()
    )]
    TargetNotEmpty { path: PathBuf },

    #[error(
        "Unable to generate the bundle as the target directory \"{}\" is not writable.",
        path.display()
    )]
    TargetNotWritable { path: PathBuf },

    // ========================================================================
    // Conflicts
    // ========================================================================
    #[error("Bundle \"{identifier}\" is already imported.")]
    DuplicateImport { identifier: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidNamespace { .. } => vec![
                "Namespaces look like Acme/BlogBundle or Acme\\Blog\\BlogBundle".into(),
                "The last segment must end with \"Bundle\"".into(),
                "Use / instead of \\ as the delimiter to avoid shell quoting problems".into(),
            ],
            Self::InvalidBundleName { .. } => vec![
                "Bundle names must end with \"Bundle\", e.g. AcmeBlogBundle".into(),
                "A good practice is to start with the vendor name".into(),
            ],
            Self::InvalidFormat { .. } => {
                vec!["Supported formats: annotation, yaml, xml, php".into()]
            }
            Self::InvalidFlavor { .. } => vec!["Supported flavors: pimcore, symfony".into()],
            Self::InvalidIdentifier { .. } => {
                vec!["Pass the bundle name to import, e.g. AcmeBlogBundle".into()]
            }
            Self::TargetIsFile { path } | Self::TargetNotEmpty { path } => vec![
                format!("Choose another --dir, or move '{}' out of the way", path.display()),
            ],
            Self::TargetNotWritable { path } => {
                vec![format!("Check the permissions of '{}'", path.display())]
            }
            Self::DuplicateImport { identifier } => vec![
                format!("'@{identifier}' is already referenced in the routing file"),
                "Edit the existing import block instead of adding a new one".into(),
                "Note: matches inside comments also count as an existing import".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateImport { .. } => ErrorCategory::Conflict,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
}

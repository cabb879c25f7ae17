//! Application layer errors.
//!
//! These errors represent failures of ports and orchestration, not of the
//! generator. Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A site document already exists at the output location.
    #[error("Output already exists at {path}")]
    OutputExists { path: PathBuf },

    /// No clipboard backend could be found.
    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable { reason: String },

    /// The clipboard backend rejected the write.
    #[error("Clipboard write failed: {reason}")]
    ClipboardWriteFailed { reason: String },

    /// Adapter state lock poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
                "Or choose a different --out directory".into(),
            ],
            Self::ClipboardUnavailable { .. } => vec![
                "Install a clipboard tool: wl-copy, xclip, xsel, pbcopy or clip".into(),
                "Or copy the name from the output above".into(),
            ],
            Self::ClipboardWriteFailed { reason } => vec![
                format!("Clipboard tool reported: {}", reason),
                "Copy the name from the output above".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::OutputExists { .. } => ErrorCategory::Conflict,
            Self::ClipboardUnavailable { .. } | Self::ClipboardWriteFailed { .. } => {
                ErrorCategory::Unavailable
            }
        }
    }
}

//! [`HandlegenError`]: what the core hands to its callers.
//!
//! Domain and application errors are wrapped unchanged; each variant can
//! name a category and a list of next steps for the user.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Handlegen Core operations.
///
/// Generating usernames never produces one of these; they come from site
/// publishing, clipboard access, and the strict parsers.
#[derive(Debug, Error, Clone)]
pub enum HandlegenError {
    /// Errors from the domain layer.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (port failures, orchestration).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl HandlegenError {
    /// Next steps, most specific first.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Handlegen".into(),
                "Please report it along with the command you ran".into(),
            ],
        }
    }

    /// Collapses the layer-specific categories into one set.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// How the CLI groups failures into exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Unavailable,
    Internal,
}

pub type HandlegenResult<T> = Result<T, HandlegenError>;

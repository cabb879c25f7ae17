// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The generator itself never fails: keyword and style are sanitised, not
/// validated. These errors come from the strict parsers and from the site
/// document builders.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("unknown length class '{value}'")]
    InvalidLength { value: String },

    #[error("invalid site URL '{url}': {reason}")]
    InvalidSiteUrl { url: String, reason: String },

    // ========================================================================
    // Internal
    // ========================================================================
    #[error("failed to serialise {document}: {reason}")]
    SerializationFailed {
        document: &'static str,
        reason: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLength { value } => vec![
                format!("'{}' is not a length class", value),
                "Use one of: short (8), medium (12), long (18)".into(),
            ],
            Self::InvalidSiteUrl { url, .. } => vec![
                format!("Site URL: {}", url),
                "Use an absolute http(s) URL, e.g. https://username-generator.app".into(),
                "Set it with SITE_URL or site.url in the config file".into(),
            ],
            Self::SerializationFailed { .. } => {
                vec!["This appears to be a bug, please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidLength { .. } | Self::InvalidSiteUrl { .. } => ErrorCategory::Validation,
            Self::SerializationFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_lists_classes() {
        let err = DomainError::InvalidLength {
            value: "huge".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("medium")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn serialization_is_internal() {
        let err = DomainError::SerializationFailed {
            document: "json-ld",
            reason: "boom".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.to_string(), "failed to serialise json-ld: boom");
    }
}

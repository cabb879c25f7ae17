//! CLI-level errors.
//!
//! Everything a command can fail with ends up as a [`CliError`]. `main`
//! logs it, renders it to stderr with [`CliError::render`] and exits with
//! [`CliError::exit_code`]. Core errors keep their own suggestions; the
//! CLI only decides how they map onto exit codes.

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use handlegen_core::{domain::DomainError, error::HandlegenError};

pub use handlegen_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// `--copy` pointed past the end of the suggestion list.
    #[error("No suggestion #{index}: only {available} generated")]
    CopyIndexOutOfRange { index: usize, available: usize },

    /// `config get` with a key that does not exist.
    #[error("Unknown config key '{key}'")]
    UnknownConfigKey { key: String },

    /// Settings could not be loaded, or a loaded value is unusable.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{0}")]
    Core(#[from] HandlegenError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Built without a cargo feature the command needs.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CopyIndexOutOfRange { available, .. } => vec![
                format!("Pick an index between 1 and {}", available),
                "Or raise --count to get more suggestions".into(),
            ],

            Self::UnknownConfigKey { key } => vec![
                format!("'{}' is not a configuration key", key),
                "List every key with: handlegen config list".into(),
                "Keys look like: site.url, generator.count, output.no_color".into(),
            ],

            Self::ConfigError { .. } => vec![
                "Check the file shown by: handlegen config path".into(),
                "Check HANDLEGEN_* and SITE_URL in the environment or .env".into(),
                "Use 'handlegen init --force' to write a fresh default config".into(),
            ],

            Self::Core(core) => core.suggestions(),

            Self::IoError { .. } => vec![
                "Check that the terminal is writable and the path is accessible".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![format!(
                "Rebuild with the '{}' feature: cargo install handlegen-cli --features {}",
                feature, feature
            )],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CopyIndexOutOfRange { .. } => ErrorCategory::UserError,
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::Unavailable | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Process exit status: user 2, not found 3, configuration 4, anything
    /// else 1.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// The stderr report: message, cause chain (verbose only), suggestions.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("\u{2717} Error:", |s| s.red().bold().to_string()),
            paint(&self.to_string(), |s| s.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {}\n",
                    paint(&format!("caused by: {err}"), |s| s.dimmed().to_string())
                ));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |s| s.yellow().bold().to_string())
            ));
            for line in &suggestions {
                out.push_str(&format!("  {line}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Run again with -v for the full cause chain.", |s| s
                    .dimmed()
                    .to_string())
            ));
        }

        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code = self.exit_code(), "{}", self)
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code = self.exit_code(), "{}", self)
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "Error source");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments, or a request that conflicts with existing state.
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Attach a context message while converting a foreign error.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

impl<T> IntoCli<T> for Result<T, serde_json::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| {
            CliError::Core(HandlegenError::Internal {
                message: format!("{}: {}", f().into(), e),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use handlegen_core::application::ApplicationError;

    fn output_exists() -> CliError {
        CliError::Core(
            ApplicationError::OutputExists {
                path: PathBuf::from("public/robots.txt"),
            }
            .into(),
        )
    }

    #[test]
    fn output_exists_suggests_force() {
        assert!(output_exists().suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn copy_index_suggestions_name_the_range() {
        let err = CliError::CopyIndexOutOfRange {
            index: 9,
            available: 3,
        };
        assert!(err.suggestions().iter().any(|s| s.contains("1 and 3")));
    }

    #[test]
    fn unknown_key_points_at_config_list() {
        let err = CliError::UnknownConfigKey {
            key: "site.colour".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("config list")));
    }

    #[test]
    fn cli_variants_map_to_exit_codes() {
        let copy = CliError::CopyIndexOutOfRange {
            index: 5,
            available: 4,
        };
        let key = CliError::UnknownConfigKey { key: "x".into() };
        let config = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        let io = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        let feature = CliError::FeatureNotAvailable {
            feature: "interactive",
        };

        assert_eq!(copy.exit_code(), 2);
        assert_eq!(key.exit_code(), 3);
        assert_eq!(config.exit_code(), 4);
        assert_eq!(io.exit_code(), 1);
        assert_eq!(feature.exit_code(), 4);
    }

    #[test]
    fn core_categories_map_to_exit_codes() {
        let invalid_url: CliError = DomainError::InvalidSiteUrl {
            url: "ftp://x".into(),
            reason: "scheme".into(),
        }
        .into();
        assert_eq!(invalid_url.exit_code(), 2);
        assert_eq!(output_exists().exit_code(), 2);

        let bug = CliError::Core(HandlegenError::Internal {
            message: "x".into(),
        });
        assert_eq!(bug.exit_code(), 1);

        let clipboard = CliError::Core(
            ApplicationError::ClipboardUnavailable {
                reason: "none".into(),
            }
            .into(),
        );
        assert_eq!(clipboard.exit_code(), 1);
    }

    #[test]
    fn plain_render_has_no_escape_codes() {
        let err = CliError::CopyIndexOutOfRange {
            index: 4,
            available: 2,
        };
        let s = err.render(false, false);
        assert!(s.contains("Error: No suggestion #4"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("Run again with -v"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_walks_the_cause_chain() {
        let err = CliError::IoError {
            message: "writing robots.txt".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        let s = err.render(true, false);
        assert!(s.contains("caused by: read-only"));
        assert!(!s.contains("Run again with -v"));
    }

    #[test]
    fn colored_render_uses_escape_codes() {
        let err = CliError::UnknownConfigKey { key: "x".into() };
        assert!(err.render(false, true).contains('\u{1b}'));
    }

    #[test]
    fn io_context_is_kept() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        match result.with_cli_context(|| "reading config") {
            Err(CliError::IoError { message, .. }) => assert_eq!(message, "reading config"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn json_context_becomes_internal() {
        let result: Result<(), serde_json::Error> = serde_json::from_str::<()>("{");
        let err = result.with_cli_context(|| "encoding").unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("encoding"));
    }
}

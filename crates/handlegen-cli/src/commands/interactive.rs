//! `handlegen interactive`: a prompt-driven [`UsernameSession`].
//!
//! The session regenerates only on request; editing the keyword, style or
//! length just updates the inputs, the same way the form fields behave on
//! the site.

use std::time::Instant;

use handlegen_core::{
    application::{SessionDefaults, UsernameSession},
    domain::vocabulary::availability_hint,
};

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

/// Session defaults taken from the `[generator]` config section.
fn session_defaults(config: &AppConfig) -> SessionDefaults {
    SessionDefaults {
        keyword: config.generator.keyword.clone(),
        length: config.generator.length,
        ..SessionDefaults::default()
    }
}

/// `"<name>  [Copy]"` rows for the current results.
fn render_rows(session: &UsernameSession, now: Instant) -> Vec<String> {
    session
        .results()
        .iter()
        .map(|name| format!("{name:<20} [{}]", session.label_for(name, now)))
        .collect()
}

fn show(session: &UsernameSession, output: &OutputManager) -> CliResult<()> {
    output.header(&session.heading())?;
    output.print(&format!(
        "keyword: {:?}  style: {:?}  length: {}",
        session.keyword(),
        session.style(),
        session.length()
    ))?;
    for (i, row) in render_rows(session, Instant::now()).iter().enumerate() {
        output.data(&format!("{:>3}. {row}", i + 1))?;
    }
    output.print(&format!("     {}", availability_hint()))?;
    Ok(())
}

#[cfg(feature = "interactive")]
pub use prompt::execute;

#[cfg(not(feature = "interactive"))]
pub fn execute(_config: AppConfig, _output: OutputManager) -> CliResult<()> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
mod prompt {
    use std::time::Instant;

    use dialoguer::{FuzzySelect, Input, Select, theme::ColorfulTheme};
    use tracing::{debug, instrument};

    use handlegen_adapters::{SystemClipboard, ThreadCoin};
    use handlegen_core::{
        application::{GeneratorService, UsernameSession},
        domain::{UsernameLength, vocabulary::SUGGESTED_STYLES},
    };

    use super::{session_defaults, show};
    use crate::{
        config::AppConfig,
        error::{CliError, CliResult},
        output::OutputManager,
    };

    const ACTIONS: [&str; 6] = [
        "Regenerate",
        "Copy a name",
        "Set keyword",
        "Set style",
        "Set length",
        "Quit",
    ];

    #[instrument(skip_all)]
    pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
        let theme = ColorfulTheme::default();
        let clipboard = SystemClipboard::detect();
        let mut session = UsernameSession::new(
            GeneratorService::new(Box::new(ThreadCoin::new())),
            session_defaults(&config),
        );

        loop {
            show(&session, &output)?;

            let action = Select::with_theme(&theme)
                .with_prompt("What next?")
                .items(&ACTIONS)
                .default(0)
                .interact_opt()
                .map_err(prompt_error)?;

            match action {
                Some(0) => session.regenerate(),
                Some(1) => copy(&mut session, &clipboard, &theme, &output)?,
                Some(2) => {
                    let keyword: String = Input::with_theme(&theme)
                        .with_prompt("Keyword")
                        .with_initial_text(session.keyword())
                        .allow_empty(true)
                        .interact_text()
                        .map_err(prompt_error)?;
                    session.set_keyword(keyword);
                }
                Some(3) => {
                    let style: String = Input::with_theme(&theme)
                        .with_prompt(format!("Style (e.g. {})", SUGGESTED_STYLES.join(", ")))
                        .with_initial_text(session.style())
                        .allow_empty(true)
                        .interact_text()
                        .map_err(prompt_error)?;
                    session.set_style(style);
                }
                Some(4) => {
                    let current = UsernameLength::ALL
                        .iter()
                        .position(|l| *l == session.length())
                        .unwrap_or(1);
                    let labels: Vec<String> = UsernameLength::ALL
                        .iter()
                        .map(|l| format!("{} (up to {} chars)", l, l.budget()))
                        .collect();
                    let picked = Select::with_theme(&theme)
                        .with_prompt("Length")
                        .items(&labels)
                        .default(current)
                        .interact()
                        .map_err(prompt_error)?;
                    session.set_length(UsernameLength::ALL[picked]);
                }
                _ => break,
            }
        }

        Ok(())
    }

    fn copy(
        session: &mut UsernameSession,
        clipboard: &SystemClipboard,
        theme: &ColorfulTheme,
        output: &OutputManager,
    ) -> CliResult<()> {
        if session.results().is_empty() {
            output.warning("Nothing to copy yet")?;
            return Ok(());
        }

        let picked = FuzzySelect::with_theme(theme)
            .with_prompt("Copy which name?")
            .items(session.results())
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;

        let Some(index) = picked else {
            return Ok(());
        };
        let name = session.results()[index].clone();

        // A failed copy only leaves the row without its "Copied" mark.
        if session.copy(&name, clipboard, Instant::now()) {
            output.success(&format!("Copied {name}"))?;
        } else {
            debug!(name = %name, "Copy failed");
        }
        Ok(())
    }

    fn prompt_error(e: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: format!("Prompt failed: {e}"),
            source: std::io::Error::other(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use handlegen_core::{
        application::{GeneratorService, ports::Clipboard},
        domain::UsernameLength,
        error::HandlegenResult,
    };
    use handlegen_adapters::MemoryClipboard;

    use super::*;

    struct Accepting;

    impl Clipboard for Accepting {
        fn write_text(&self, _text: &str) -> HandlegenResult<()> {
            Ok(())
        }
    }

    fn session() -> UsernameSession {
        UsernameSession::new(
            GeneratorService::new(Box::new(|| true)),
            SessionDefaults::default(),
        )
    }

    #[test]
    fn defaults_follow_generator_config() {
        let mut config = AppConfig::default();
        config.generator.keyword = "orbit".into();
        config.generator.length = UsernameLength::Long;

        let defaults = session_defaults(&config);
        assert_eq!(defaults.keyword, "orbit");
        assert_eq!(defaults.length, UsernameLength::Long);
        assert_eq!(defaults.style, "minimal");
    }

    #[test]
    fn rows_flash_copied_label() {
        let mut s = session();
        let first = s.results()[0].clone();
        let now = Instant::now();

        assert!(render_rows(&s, now).iter().all(|r| r.ends_with("[Copy]")));

        s.copy(&first, &Accepting, now);
        let rows = render_rows(&s, now);
        assert!(rows[0].starts_with(&first));
        assert!(rows[0].ends_with("[Copied]"));
        assert!(rows[1..].iter().all(|r| r.ends_with("[Copy]")));

        let later = render_rows(&s, now + Duration::from_secs(2));
        assert!(later[0].ends_with("[Copy]"));
    }

    #[test]
    fn failed_copy_leaves_every_row_uncopied() {
        let mut s = session();
        let first = s.results()[0].clone();
        let now = Instant::now();

        s.copy(&first, &Accepting, now);
        assert!(!s.copy(&first, &MemoryClipboard::failing(), now));
        assert!(render_rows(&s, now).iter().all(|r| r.ends_with("[Copy]")));
    }
}

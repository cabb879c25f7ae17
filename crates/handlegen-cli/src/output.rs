//! Everything the commands write to stdout goes through [`OutputManager`].
//!
//! Two kinds of output:
//! - status lines (`header`, `success`, `warning`, `info`, `print`), dropped
//!   under `--quiet`;
//! - results (`data`, `json`, `suggestion`), always written, so
//!   `handlegen -q generate --format list | head -1` still works.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliResult, IntoCli};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Warning,
    Info,
}

impl Status {
    fn symbol(self) -> char {
        match self {
            Self::Success => '\u{2713}',
            Self::Warning => '\u{26a0}',
            Self::Info => '\u{2139}',
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Self::Success => text.green().to_string(),
            Self::Warning => text.yellow().to_string(),
            Self::Info => text.blue().to_string(),
        }
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Colour needs a human format and no `--no-color` / `NO_COLOR` /
    /// `output.no_color`.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = args.resolve_format(io::stdout().is_terminal());
        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.color {
            self.term.write_line(&text.cyan().bold().to_string())
        } else {
            self.term.write_line(text)
        }
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Info, msg)
    }

    /// Result text. A trailing newline in `text` is not doubled.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text.strip_suffix('\n').unwrap_or(text))
    }

    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value)
            .with_cli_context(|| "Failed to encode JSON output")?;
        self.data(&text)?;
        Ok(())
    }

    /// `  3. NovaMini             IG | TikTok | ...`
    pub fn suggestion(&self, index: usize, name: &str, hint: &str) -> io::Result<()> {
        self.term.write_line(&self.suggestion_line(index, name, hint))
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    /// Never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn status(&self, kind: Status, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let symbol = kind.symbol().to_string();
        let line = if self.color {
            format!("{} {}", kind.paint(&symbol).bold(), kind.paint(msg))
        } else {
            format!("{symbol} {msg}")
        };
        self.term.write_line(&line)
    }

    fn suggestion_line(&self, index: usize, name: &str, hint: &str) -> String {
        let number = format!("{index:>3}.");
        let name = format!("{name:<20}");
        if self.color {
            format!("{} {} {}", number.dimmed(), name.bold(), hint.dimmed())
        } else {
            format!("{number} {name} {hint}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_drops_status_but_not_results() {
        let out = manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.header("Suggestions").is_ok());
        assert!(out.warning("No suggestions fit").is_ok());
        assert!(out.data("NovaMini\n").is_ok());
        assert!(out.json(&["NovaMini"]).is_ok());
    }

    #[test]
    fn plain_suggestion_rows_line_up() {
        let out = manager(false, true, OutputFormat::Plain);
        assert_eq!(
            out.suggestion_line(3, "NovaMini", "IG"),
            "  3. NovaMini             IG"
        );
        assert_eq!(
            out.suggestion_line(12, "Nova_Mini", "IG"),
            " 12. Nova_Mini            IG"
        );
    }

    #[test]
    fn colored_suggestion_rows_keep_the_name() {
        let out = manager(false, false, OutputFormat::Human);
        let line = out.suggestion_line(1, "NovaMini", "IG");
        assert!(line.contains("NovaMini"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn color_needs_human_format_and_no_opt_out() {
        assert!(manager(false, false, OutputFormat::Human).supports_color());
        assert!(!manager(false, true, OutputFormat::Human).supports_color());
        assert!(!manager(false, false, OutputFormat::Plain).supports_color());
        assert!(!manager(false, false, OutputFormat::Json).supports_color());
    }

    #[test]
    fn config_no_color_is_honoured() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn format_is_resolved() {
        assert_eq!(manager(false, false, OutputFormat::Plain).format(), OutputFormat::Plain);
        assert_eq!(manager(false, false, OutputFormat::Json).format(), OutputFormat::Json);
    }
}

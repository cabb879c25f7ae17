//! Interactive username session.
//!
//! Holds what the user has typed (keyword, style, length), the current
//! suggestions, and a short-lived "copied" mark. Generation happens once on
//! construction, again whenever the defaults change, and on explicit
//! [`UsernameSession::regenerate`]. Editing inputs alone never regenerates.
//!
//! Time is passed in as an [`Instant`] so the copied mark can be tested
//! without sleeping.

use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::{
    application::{ports::Clipboard, services::GeneratorService},
    domain::{DEFAULT_KEYWORD, GeneratorOptions, UsernameLength},
};

/// Suggestions produced per generation.
pub const SESSION_COUNT: usize = 16;

/// How long a copied name is reported as copied.
pub const COPIED_FLASH: Duration = Duration::from_millis(1200);

pub const DEFAULT_HEADING: &str = "Username Generator";

/// Defaults the session starts from and falls back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub heading: String,
    pub keyword: String,
    pub style: String,
    pub length: UsernameLength,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.into(),
            keyword: String::new(),
            style: "minimal".into(),
            length: UsernameLength::Medium,
        }
    }
}

#[derive(Debug, Clone)]
struct CopiedMark {
    name: String,
    until: Instant,
}

/// Stateful binding between user input and the generator.
pub struct UsernameSession {
    generator: GeneratorService,
    defaults: SessionDefaults,
    keyword: String,
    style: String,
    length: UsernameLength,
    results: Vec<String>,
    copied: Option<CopiedMark>,
}

impl UsernameSession {
    /// Start a session from `defaults` and generate the first batch.
    pub fn new(generator: GeneratorService, defaults: SessionDefaults) -> Self {
        let mut session = Self {
            generator,
            keyword: defaults.keyword.clone(),
            style: defaults.style.clone(),
            length: defaults.length,
            defaults,
            results: Vec::new(),
            copied: None,
        };
        session.generate_from_defaults();
        session
    }

    // ── inputs ──────────────────────────────────────────────────────────────

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.style = style.into();
    }

    pub fn set_length(&mut self, length: UsernameLength) {
        self.length = length;
    }

    /// Replace the defaults and regenerate from them.
    ///
    /// The user's current inputs are kept; only the results change.
    pub fn reset_defaults(&mut self, defaults: SessionDefaults) {
        if defaults == self.defaults {
            return;
        }
        self.defaults = defaults;
        self.generate_from_defaults();
    }

    /// Regenerate from the current inputs.
    ///
    /// An empty keyword falls back to the default keyword, then to "Nova";
    /// an empty style falls back to the default style.
    #[instrument(skip(self))]
    pub fn regenerate(&mut self) {
        let keyword = first_non_empty(&[&self.keyword, &self.defaults.keyword])
            .unwrap_or(DEFAULT_KEYWORD)
            .to_string();
        let style = first_non_empty(&[&self.style])
            .unwrap_or(self.defaults.style.as_str())
            .to_string();
        self.run(keyword, style, self.length);
    }

    fn generate_from_defaults(&mut self) {
        let keyword = first_non_empty(&[&self.defaults.keyword])
            .unwrap_or(DEFAULT_KEYWORD)
            .to_string();
        let style = self.defaults.style.clone();
        self.run(keyword, style, self.defaults.length);
    }

    fn run(&mut self, keyword: String, style: String, length: UsernameLength) {
        let options = GeneratorOptions {
            keyword: Some(keyword),
            style: Some(style),
            length: Some(length),
            count: Some(SESSION_COUNT),
        };
        self.results = self.generator.generate(&options);
    }

    // ── copy ────────────────────────────────────────────────────────────────

    /// Copy `name` to the clipboard.
    ///
    /// On success `name` is reported as copied for [`COPIED_FLASH`] after
    /// `now`, superseding any earlier mark. On failure the mark is cleared
    /// and `false` is returned; the error itself is not surfaced.
    pub fn copy(&mut self, name: &str, clipboard: &dyn Clipboard, now: Instant) -> bool {
        match clipboard.write_text(name) {
            Ok(()) => {
                self.copied = Some(CopiedMark {
                    name: name.to_string(),
                    until: now + COPIED_FLASH,
                });
                true
            }
            Err(e) => {
                debug!(error = %e, "Clipboard write failed");
                self.copied = None;
                false
            }
        }
    }

    /// The name currently shown as copied, if the mark is still live.
    pub fn copied_at(&self, now: Instant) -> Option<&str> {
        self.copied
            .as_ref()
            .filter(|mark| now < mark.until)
            .map(|mark| mark.name.as_str())
    }

    /// Button label for `name`.
    pub fn label_for(&self, name: &str, now: Instant) -> &'static str {
        if self.copied_at(now) == Some(name) {
            "Copied"
        } else {
            "Copy"
        }
    }

    // ── accessors ───────────────────────────────────────────────────────────

    /// `"<heading>: <keyword>"` while a keyword is typed, else the heading.
    pub fn heading(&self) -> String {
        if self.keyword.is_empty() {
            self.defaults.heading.clone()
        } else {
            format!("{}: {}", self.defaults.heading, self.keyword)
        }
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn length(&self) -> UsernameLength {
        self.length
    }

    pub fn defaults(&self) -> &SessionDefaults {
        &self.defaults
    }
}

fn first_non_empty<'a>(values: &[&'a String]) -> Option<&'a str> {
    values
        .iter()
        .copied()
        .find(|v| !v.is_empty())
        .map(String::as_str)
}

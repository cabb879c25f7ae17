//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the values derived from
//! it ([`SiteConfig`], [`GeneratorOptions`]).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SITE_URL` (site base URL only)
//! 3. `HANDLEGEN_*` environment variables, `__` between sections
//!    (`HANDLEGEN_SITE__URL`, `HANDLEGEN_GENERATOR__COUNT`)
//! 4. Config file (`--config` or the platform config directory)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use handlegen_core::domain::{
    DEFAULT_COUNT, DEFAULT_STYLE, DomainError, GeneratorOptions, SiteConfig, UsernameLength,
    site::config::{DEFAULT_SITE_DESCRIPTION, DEFAULT_SITE_NAME, DEFAULT_SITE_URL, DEFAULT_TWITTER},
};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "HANDLEGEN";

/// Plain environment variable that overrides `site.url`.
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Identity of the site that hosts the generator.
    pub site: SiteSection,
    /// Defaults for `handlegen generate`.
    pub generator: GeneratorDefaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub name: String,
    pub description: String,
    pub url: String,
    pub twitter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
    /// Empty means "Nova".
    pub keyword: String,
    /// Empty means a vocabulary adjective.
    pub style: String,
    /// Unrecognised values fall back to medium.
    #[serde(deserialize_with = "lenient_length")]
    pub length: UsernameLength,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_SITE_NAME.into(),
            description: DEFAULT_SITE_DESCRIPTION.into(),
            url: DEFAULT_SITE_URL.into(),
            twitter: DEFAULT_TWITTER.into(),
        }
    }
}

fn lenient_length<'de, D>(deserializer: D) -> Result<UsernameLength, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let length = UsernameLength::parse_lenient(&raw);
    if raw.parse::<UsernameLength>().is_err() {
        tracing::debug!(value = %raw, fallback = %length, "Unknown generator.length");
    }
    Ok(length)
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            style: DEFAULT_STYLE.into(),
            length: UsernameLength::Medium,
            count: DEFAULT_COUNT,
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        let site_url = std::env::var(SITE_URL_ENV).ok();
        Self::load_layers(&path, required, None, site_url)
    }

    /// Layered load with an injectable environment.
    ///
    /// `env` replaces the process environment for `HANDLEGEN_*` lookups when
    /// set; `site_url` is the value of `SITE_URL`, if any.
    pub fn load_layers(
        path: &Path,
        required: bool,
        env: Option<config::Map<String, String>>,
        site_url: Option<String>,
    ) -> anyhow::Result<Self> {
        let site_url = site_url.filter(|url| !url.trim().is_empty());

        let config = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?,
            )
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .set_override_option("site.url", site_url)
            .context("Failed to apply SITE_URL override")?
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.handlegen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "handlegen", "handlegen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".handlegen.toml"))
    }

    /// The file actually consulted: `--config` if given, else the default.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Validated site identity.
    pub fn site_config(&self) -> Result<SiteConfig, DomainError> {
        SiteConfig::new(
            self.site.name.clone(),
            self.site.description.clone(),
            &self.site.url,
            self.site.twitter.clone(),
        )
    }

    /// Generator defaults as options; an empty keyword is left unset.
    pub fn generator_options(&self) -> GeneratorOptions {
        let generator = &self.generator;
        GeneratorOptions {
            keyword: Some(generator.keyword.clone()).filter(|k| !k.is_empty()),
            style: Some(generator.style.clone()),
            length: Some(generator.length),
            count: Some(generator.count),
        }
    }
}

//! Site identity and URL helpers.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::error::DomainError;

pub const DEFAULT_SITE_NAME: &str = "Username Generator";
pub const DEFAULT_SITE_URL: &str = "https://username-generator.app";
pub const DEFAULT_SITE_DESCRIPTION: &str = "Generate unique usernames with style presets and \
     availability hints for gaming, social, and brands.";
pub const DEFAULT_TWITTER: &str = "@usernamegen";

/// Static configuration of the site that hosts the generator.
///
/// The base URL is validated on construction and stored with one trailing
/// slash removed, as `SITE_URL` values are usually written with at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    name: String,
    description: String,
    url: String,
    twitter: String,
}

impl SiteConfig {
    /// Build a site config, validating and normalising `url`.
    ///
    /// An empty URL means "not configured" and yields [`DEFAULT_SITE_URL`].
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: &str,
        twitter: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: name.into(),
            description: description.into(),
            url: normalize_base_url(url)?,
            twitter: twitter.into(),
        })
    }

    /// Same as [`Default`], with a different base URL.
    pub fn with_url(url: &str) -> Result<Self, DomainError> {
        Ok(Self {
            url: normalize_base_url(url)?,
            ..Self::default()
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Base URL with one trailing slash removed.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn twitter(&self) -> &str {
        &self.twitter
    }

    /// Resolve `path` against the base URL.
    ///
    /// A missing leading `/` is added. If the join fails the normalised path
    /// is returned unchanged.
    pub fn absolute_url(&self, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Url::parse(&self.url)
            .and_then(|base| base.join(&path))
            .map(String::from)
            .unwrap_or(path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SITE_NAME.into(),
            description: DEFAULT_SITE_DESCRIPTION.into(),
            url: DEFAULT_SITE_URL.into(),
            twitter: DEFAULT_TWITTER.into(),
        }
    }
}

fn normalize_base_url(raw: &str) -> Result<String, DomainError> {
    let raw_trimmed = raw.trim();
    let trimmed = raw_trimmed.strip_suffix('/').unwrap_or(raw_trimmed);
    if trimmed.is_empty() {
        return Ok(DEFAULT_SITE_URL.to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|e| DomainError::InvalidSiteUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DomainError::InvalidSiteUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(trimmed.to_string())
}

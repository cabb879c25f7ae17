//! XML sitemap.

use std::fmt::{self, Write as _};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::site::SiteConfig;

/// Routes published by the site.
pub const ROUTES: [&str; 1] = ["/"];

/// `<changefreq>` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

impl Sitemap {
    /// One weekly entry per route; the root gets priority 1, others 0.8.
    pub fn for_site(site: &SiteConfig, now: DateTime<Utc>) -> Self {
        let entries = ROUTES
            .iter()
            .map(|route| SitemapEntry {
                url: site.absolute_url(route),
                last_modified: now,
                change_frequency: ChangeFrequency::Weekly,
                priority: if *route == "/" { 1.0 } else { 0.8 },
            })
            .collect();

        Self { entries }
    }

    /// Render as a `urlset` document.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );

        for entry in &self.entries {
            // Writing to a String cannot fail.
            let _ = write!(
                xml,
                "<url>\n\
                 <loc>{}</loc>\n\
                 <lastmod>{}</lastmod>\n\
                 <changefreq>{}</changefreq>\n\
                 <priority>{}</priority>\n\
                 </url>\n",
                escape_xml(&entry.url),
                entry
                    .last_modified
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
                entry.change_frequency,
                entry.priority,
            );
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

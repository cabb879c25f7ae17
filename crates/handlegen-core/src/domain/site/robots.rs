//! `robots.txt` policy.

use std::fmt;

use crate::domain::site::SiteConfig;

/// Agents that get an explicit group, in output order. `*` comes last.
pub const NAMED_AGENTS: [&str; 4] = ["Googlebot", "GPTBot", "CCBot", "*"];

/// Seconds between requests asked of every crawler.
pub const CRAWL_DELAY_SECS: u32 = 1;

/// One `User-Agent` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: String,
    pub crawl_delay: u32,
}

/// A complete crawler policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsRule>,
    pub host: String,
    pub sitemaps: Vec<String>,
}

impl RobotsPolicy {
    /// Allow-all policy with a crawl delay for every named agent, pointing
    /// at the site's sitemap.
    pub fn for_site(site: &SiteConfig) -> Self {
        let rules = NAMED_AGENTS
            .iter()
            .map(|agent| RobotsRule {
                user_agent: (*agent).to_string(),
                allow: "/".into(),
                crawl_delay: CRAWL_DELAY_SECS,
            })
            .collect();

        Self {
            rules,
            host: site.url().to_string(),
            sitemaps: vec![format!("{}/sitemap.xml", site.url())],
        }
    }
}

impl fmt::Display for RobotsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "User-Agent: {}", rule.user_agent)?;
            writeln!(f, "Allow: {}", rule.allow)?;
            writeln!(f, "Crawl-delay: {}", rule.crawl_delay)?;
            writeln!(f)?;
        }
        writeln!(f, "Host: {}", self.host)?;
        for sitemap in &self.sitemaps {
            writeln!(f, "Sitemap: {sitemap}")?;
        }
        Ok(())
    }
}

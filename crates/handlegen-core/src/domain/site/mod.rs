//! Static documents of the site hosting the generator.
//!
//! Everything here is derived from [`SiteConfig`] and fixed page content;
//! nothing reads the environment. Configuration loading belongs to the CLI.

pub mod config;
pub mod robots;
pub mod schema;
pub mod sitemap;

pub use config::{DEFAULT_SITE_URL, SiteConfig};
pub use robots::{RobotsPolicy, RobotsRule};
pub use schema::{FAQS, FaqEntry, FaqPage, StructuredData, WebSite};
pub use sitemap::{ChangeFrequency, Sitemap, SitemapEntry};

//! Site Service - renders and publishes the static site documents.
//!
//! Publishing workflow:
//! 1. Render robots policy, sitemap and JSON-LD
//! 2. Refuse to overwrite existing files unless forced
//! 3. Write through the `Filesystem` port, rolling back on failure

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{RobotsPolicy, SiteConfig, Sitemap, StructuredData},
    error::{HandlegenError, HandlegenResult},
};

pub const ROBOTS_FILE: &str = "robots.txt";
pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const SCHEMA_FILE: &str = "schema.jsonld";

/// One rendered document and the file name it is published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDocument {
    pub file_name: &'static str,
    pub content: String,
}

/// Service for the site's generated documents.
pub struct SiteService {
    site: SiteConfig,
    filesystem: Box<dyn Filesystem>,
}

impl SiteService {
    /// Create a new site service writing through `filesystem`.
    pub fn new(site: SiteConfig, filesystem: Box<dyn Filesystem>) -> Self {
        Self { site, filesystem }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// `robots.txt` contents.
    pub fn robots(&self) -> String {
        RobotsPolicy::for_site(&self.site).to_string()
    }

    /// `sitemap.xml` contents, stamped with `now`.
    pub fn sitemap(&self, now: DateTime<Utc>) -> String {
        Sitemap::for_site(&self.site, now).to_xml()
    }

    /// Pretty-printed JSON-LD array.
    pub fn structured_data(&self) -> HandlegenResult<String> {
        StructuredData::for_site(&self.site)
            .to_json_pretty()
            .map_err(HandlegenError::Domain)
    }

    /// Every document, in publishing order.
    pub fn render_all(&self, now: DateTime<Utc>) -> HandlegenResult<Vec<SiteDocument>> {
        Ok(vec![
            SiteDocument {
                file_name: ROBOTS_FILE,
                content: self.robots(),
            },
            SiteDocument {
                file_name: SITEMAP_FILE,
                content: self.sitemap(now),
            },
            SiteDocument {
                file_name: SCHEMA_FILE,
                content: self.structured_data()?,
            },
        ])
    }

    /// Write every document into `out_dir`.
    ///
    /// Fails with [`ApplicationError::OutputExists`] before writing anything
    /// if a target file exists and `force` is not set. Returns the written
    /// paths.
    #[instrument(
        skip_all,
        fields(out_dir = %out_dir.as_ref().display(), site = %self.site.url())
    )]
    pub fn publish(
        &self,
        out_dir: impl AsRef<Path>,
        now: DateTime<Utc>,
        force: bool,
    ) -> HandlegenResult<Vec<PathBuf>> {
        let out_dir = out_dir.as_ref();
        let documents = self.render_all(now)?;

        if !force {
            if let Some(existing) = documents
                .iter()
                .map(|doc| out_dir.join(doc.file_name))
                .find(|path| self.filesystem.exists(path))
            {
                return Err(ApplicationError::OutputExists { path: existing }.into());
            }
        }

        self.filesystem.create_dir_all(out_dir)?;

        let mut written = Vec::with_capacity(documents.len());
        for doc in &documents {
            let path = out_dir.join(doc.file_name);
            if let Err(e) = self.filesystem.write_file(&path, &doc.content) {
                warn!(path = %path.display(), "Write failed, attempting rollback");
                self.rollback(&written);
                return Err(e);
            }
            written.push(path);
        }

        info!(files = written.len(), "Site documents published");
        Ok(written)
    }

    /// Best-effort removal of files written so far.
    fn rollback(&self, written: &[PathBuf]) {
        for path in written {
            if let Err(e) = self.filesystem.remove_file(path) {
                warn!(error = %e, path = %path.display(), "Rollback failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use mockall::predicate::*;

    use super::*;
    use crate::application::ports::output::MockFilesystem;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap()
    }

    #[test]
    fn renders_three_documents() {
        let svc = SiteService::new(SiteConfig::default(), Box::new(MockFilesystem::new()));
        let docs = svc.render_all(now()).unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.file_name).collect();
        assert_eq!(names, [ROBOTS_FILE, SITEMAP_FILE, SCHEMA_FILE]);
        assert!(docs[0].content.contains("Sitemap: https://username-generator.app/sitemap.xml"));
        assert!(docs[2].content.trim_start().starts_with('['));
    }

    #[test]
    fn publish_refuses_existing_output() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(Path::new("public/robots.txt")))
            .returning(|_| true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let svc = SiteService::new(SiteConfig::default(), Box::new(fs));
        let err = svc.publish("public", now(), false).unwrap_err();
        assert!(matches!(
            err,
            HandlegenError::Application(ApplicationError::OutputExists { .. })
        ));
    }

    #[test]
    fn publish_with_force_skips_existence_check() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_write_file().times(3).returning(|_, _| Ok(()));

        let svc = SiteService::new(SiteConfig::default(), Box::new(fs));
        let written = svc.publish("public", now(), true).unwrap();
        assert_eq!(written.len(), 3);
        assert_eq!(written[1], Path::new("public/sitemap.xml"));
    }

    #[test]
    fn failed_write_rolls_back_earlier_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            if path.ends_with(SITEMAP_FILE) {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        fs.expect_remove_file()
            .with(eq(Path::new("out/robots.txt")))
            .times(1)
            .returning(|_| Ok(()));

        let svc = SiteService::new(SiteConfig::default(), Box::new(fs));
        let err = svc.publish("out", now(), false).unwrap_err();
        assert!(matches!(
            err,
            HandlegenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}

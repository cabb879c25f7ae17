//! `handlegen site`: print or publish robots.txt, sitemap.xml and JSON-LD.

use chrono::Utc;
use tracing::instrument;

use handlegen_adapters::LocalFilesystem;
use handlegen_core::{application::SiteService, domain::StructuredData};

use crate::{
    cli::{SiteBuildArgs, SiteCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct site subcommand.
#[instrument(skip_all)]
pub fn execute(cmd: SiteCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = site_service(&config)?;

    match cmd {
        SiteCommands::Robots => output.data(&service.robots())?,
        SiteCommands::Sitemap => output.data(&service.sitemap(Utc::now()))?,
        SiteCommands::Schema { script } => {
            let text = if script {
                StructuredData::for_site(service.site()).to_script_tag()?
            } else {
                service.structured_data()?
            };
            output.data(&text)?;
        }
        SiteCommands::Build(args) => build(&service, args, &output)?,
    }

    Ok(())
}

fn build(service: &SiteService, args: SiteBuildArgs, output: &OutputManager) -> CliResult<()> {
    let written = service.publish(&args.out, Utc::now(), args.force)?;
    for path in &written {
        output.info(&format!("Wrote {}", path.display()))?;
    }
    output.success(&format!(
        "Site documents for {} written to {}",
        service.site().url(),
        args.out.display()
    ))?;
    Ok(())
}

/// A bad `site.url` is reported as a configuration problem.
fn site_service(config: &AppConfig) -> CliResult<SiteService> {
    let site = config
        .site_config()
        .map_err(|e| CliError::ConfigError {
            message: format!("site.url '{}' is not usable", config.site.url),
            source: Some(Box::new(e)),
        })?;
    Ok(SiteService::new(site, Box::new(LocalFilesystem::new())))
}

//! `handlegen`: username suggestions in the terminal, and the robots.txt,
//! sitemap and JSON-LD for the site that hosts the generator.
//!
//! Startup runs in this order: `.env` is read, the arguments are parsed,
//! logging is installed, the config is loaded, and the command runs. Any
//! failure after parsing becomes a [`CliError`] on stderr.
//!
//! Exit status: 0 ok, 1 internal, 2 bad input or conflict, 3 unknown key,
//! 4 configuration.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // SITE_URL and HANDLEGEN_* may live in .env; it is optional.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version also land here, on stdout with status 0.
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("handlegen: {e}");
        return ExitCode::from(1);
    }
    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        format = ?cli.global.output_format,
        "Arguments parsed"
    );

    let verbose = cli.global.verbose > 0;
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => return report(err, verbose, false),
    };

    let output = OutputManager::new(&cli.global, &config);
    let color = output.supports_color() && std::io::stderr().is_terminal();

    match run(cli, config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err, verbose, color),
    }
}

/// `init` creates the file, so it starts from the defaults instead.
fn load_config(cli: &Cli) -> CliResult<AppConfig> {
    if matches!(cli.command, Commands::Init(_)) {
        return Ok(AppConfig::default());
    }
    AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: None,
    })
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let GlobalArgs { config: config_file, .. } = cli.global;
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, config, output),
        Commands::Styles => commands::styles::execute(output),
        Commands::Interactive => commands::interactive::execute(config, output),
        Commands::Site(cmd) => commands::site::execute(cmd, config, output),
        Commands::Init(args) => commands::init::execute(args, config_file, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, config_file, output),
    }
}

fn report(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();
    eprint!("{}", err.render(verbose, color));
    ExitCode::from(err.exit_code())
}

//! Logging setup for the binary.
//!
//! The library crates only emit events; this module installs the one
//! subscriber. Logs always go to stderr so that stdout carries nothing but
//! suggestions and documents.
//!
//! Level: `--quiet` gives error, no flag warn, `-v` info, `-vv` debug,
//! `-vvv` trace. A set `RUST_LOG` replaces the whole filter.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events pass the default filter.
const TARGETS: [&str; 3] = ["handlegen", "handlegen_core", "handlegen_adapters"];

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level_for(args))));

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal());

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if args.wants_json() {
        registry.with(stderr.json()).try_init()
    } else {
        registry.with(stderr.without_time()).try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `handlegen=warn,handlegen_core=warn,...`
fn filter_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_raises_the_level() {
        assert_eq!(level_for(&args(0, false)), LevelFilter::WARN);
        assert_eq!(level_for(&args(1, false)), LevelFilter::INFO);
        assert_eq!(level_for(&args(2, false)), LevelFilter::DEBUG);
        assert_eq!(level_for(&args(3, false)), LevelFilter::TRACE);
        assert_eq!(level_for(&args(9, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(level_for(&args(0, true)), LevelFilter::ERROR);
        assert_eq!(level_for(&args(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            filter_directives(LevelFilter::DEBUG),
            "handlegen=debug,handlegen_core=debug,handlegen_adapters=debug"
        );
    }

    #[test]
    fn directives_parse() {
        assert!(EnvFilter::try_new(filter_directives(LevelFilter::WARN)).is_ok());
    }
}

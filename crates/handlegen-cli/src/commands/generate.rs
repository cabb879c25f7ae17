//! Implementation of the `handlegen generate` command.
//!
//! Responsibility: merge CLI arguments over the configured defaults, run
//! the generator with the right coin, render the suggestions, and copy one
//! of them when asked.

use serde::Serialize;
use tracing::{debug, instrument};

use handlegen_adapters::{SeededCoin, SystemClipboard, ThreadCoin};
use handlegen_core::{
    application::{GeneratorService, ports::Clipboard},
    domain::{CoinSource, GeneratorOptions, UsernameLength, vocabulary::availability_hint},
};

use crate::{
    cli::{GenerateArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON shape of a `generate` run.
#[derive(Debug, Serialize)]
struct GenerateReport<'a> {
    keyword: String,
    style: String,
    length: UsernameLength,
    budget: usize,
    count: usize,
    suggestions: &'a [String],
}

/// Execute the `handlegen generate` command.
#[instrument(skip_all, fields(seeded = args.seed.is_some()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let coin: Box<dyn CoinSource> = match args.seed {
        Some(seed) => Box::new(SeededCoin::new(seed)),
        None => Box::new(ThreadCoin::new()),
    };
    let mut service = GeneratorService::new(coin).with_defaults(config.generator_options());

    let options = call_options(&args);
    let resolved = service.resolve(&options);
    let names = service.generate(&options);

    debug!(kept = names.len(), "Suggestions ready");

    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!(
                "Suggestions for {} ({}, up to {} chars)",
                resolved.effective_keyword(),
                resolved.effective_length(),
                resolved.effective_length().budget(),
            ))?;
            if names.is_empty() {
                output.warning("No suggestions fit the length budget")?;
            }
            let hint = availability_hint();
            for (i, name) in names.iter().enumerate() {
                output.suggestion(i + 1, name, &hint)?;
            }
        }
        ListFormat::List => {
            for name in &names {
                output.data(name)?;
            }
        }
        ListFormat::Json => {
            let length = resolved.effective_length();
            output.json(&GenerateReport {
                keyword: resolved.effective_keyword(),
                style: resolved.effective_style(),
                length,
                budget: length.budget(),
                count: resolved.effective_count(),
                suggestions: &names,
            })?;
        }
        ListFormat::Csv => {
            output.data(&to_csv(&names))?;
        }
    }

    if let Some(index) = args.copy {
        let name = pick(&names, usize::from(index))?;
        if copy_to(&SystemClipboard::detect(), name) {
            output.success(&format!("Copied {name} to the clipboard"))?;
        }
    }

    Ok(())
}

/// A clipboard that cannot be reached is not an error for the run; the
/// suggestions are already printed.
fn copy_to(clipboard: &dyn Clipboard, name: &str) -> bool {
    match clipboard.write_text(name) {
        Ok(()) => true,
        Err(e) => {
            debug!(name = %name, error = %e, "Clipboard write failed");
            false
        }
    }
}

/// Options given on the command line; unset fields fall back to config.
fn call_options(args: &GenerateArgs) -> GeneratorOptions {
    GeneratorOptions {
        keyword: args.keyword.clone(),
        style: args.style.clone(),
        length: args.length.map(UsernameLength::from),
        count: args.count.map(usize::from),
    }
}

/// 1-based lookup for `--copy`.
fn pick(names: &[String], index: usize) -> CliResult<&str> {
    index
        .checked_sub(1)
        .and_then(|i| names.get(i))
        .map(String::as_str)
        .ok_or(CliError::CopyIndexOutOfRange {
            index,
            available: names.len(),
        })
}

fn to_csv(names: &[String]) -> String {
    let mut out = String::from("index,username\n");
    for (i, name) in names.iter().enumerate() {
        out.push_str(&format!("{},{}\n", i + 1, name));
    }
    out
}

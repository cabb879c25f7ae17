//! Flags accepted before or after any subcommand.
//!
//! `handlegen -q generate --seed 7` and `handlegen generate --seed 7 -q`
//! mean the same thing; every field here is `global = true`.

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (-v, -vv, -vvv)",
        long_help = "Log more to stderr:
    (none)  - warnings and errors
    -v      - which options a run resolved to
    -vv     - candidate pool statistics, config layers
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Only print results: suggestions, documents, config values.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print results"
    )]
    pub quiet: bool,

    /// Plain output. Also set by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user config file.
    /// The file must exist, except for `init`, which creates it.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Rendering for messages and results.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// The concrete format for a stdout that is (or is not) a terminal.
    pub fn resolve_format(&self, stdout_is_terminal: bool) -> OutputFormat {
        match self.output_format {
            OutputFormat::Auto if stdout_is_terminal => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        }
    }

    /// `true` when every result, and the log stream, should be JSON.
    pub fn wants_json(&self) -> bool {
        self.output_format == OutputFormat::Json
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colours on a terminal, plain text when piped.
    #[default]
    Auto,
    /// Coloured table output.
    Human,
    /// No colours, same layout.
    Plain,
    /// JSON results and JSON log lines; overrides `generate --format`.
    Json,
}

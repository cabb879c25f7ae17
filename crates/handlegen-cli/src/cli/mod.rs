//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use handlegen_core::domain::UsernameLength;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "handlegen",
    bin_name = "handlegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Username suggestions with style presets",
    long_about = "Handlegen turns a keyword, a style and a length class into \
                  a list of username suggestions, and renders the robots.txt, \
                  sitemap and JSON-LD for the site that hosts the generator.",
    after_help = "EXAMPLES:\n\
        \x20 handlegen generate -k nova -s minimal -l short\n\
        \x20 handlegen generate -k river --format json\n\
        \x20 handlegen site build --out public\n\
        \x20 handlegen completions bash > /usr/share/bash-completion/completions/handlegen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate username suggestions.
    #[command(
        visible_alias = "g",
        about = "Generate username suggestions",
        after_help = "EXAMPLES:\n\
            \x20 handlegen generate\n\
            \x20 handlegen generate -k nova -s minimal -l short -n 5\n\
            \x20 handlegen generate -k zen --seed 42 --format csv\n\
            \x20 handlegen generate -k pixel --copy 1"
    )]
    Generate(GenerateArgs),

    /// List suggested styles and length classes.
    #[command(about = "List style presets and length classes")]
    Styles,

    /// Interactive session: type a keyword, pick a style, copy a name.
    #[command(
        visible_alias = "i",
        about = "Start an interactive session",
        after_help = "EXAMPLES:\n\
            \x20 handlegen interactive\n\
            \x20 handlegen i"
    )]
    Interactive,

    /// Render the site's crawler and search documents.
    #[command(
        about = "Render robots.txt, sitemap.xml and JSON-LD",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 handlegen site robots\n\
            \x20 SITE_URL=https://handles.example handlegen site sitemap\n\
            \x20 handlegen site build --out public --force"
    )]
    Site(SiteCommands),

    /// Initialise a Handlegen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 handlegen init           # default location\n\
            \x20 handlegen init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 handlegen completions bash > ~/.local/share/bash-completion/completions/handlegen\n\
            \x20 handlegen completions zsh  > ~/.zfunc/_handlegen\n\
            \x20 handlegen completions fish > ~/.config/fish/completions/handlegen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Handlegen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 handlegen config get site.url\n\
            \x20 handlegen config list\n\
            \x20 handlegen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `handlegen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Word every suggestion starts with.  Punctuation is stripped; an empty
    /// result falls back to "Nova".
    #[arg(short = 'k', long = "keyword", value_name = "KEYWORD")]
    pub keyword: Option<String>,

    /// Style word, e.g. minimal, cyber, cute.  Pass an empty string to use
    /// a vocabulary adjective instead.
    #[arg(short = 's', long = "style", value_name = "STYLE")]
    pub style: Option<String>,

    /// Length class.
    #[arg(short = 'l', long = "length", value_enum, value_name = "LENGTH")]
    pub length: Option<LengthArg>,

    /// Maximum number of suggestions.
    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub count: Option<u16>,

    /// Seed the RNG so the same inputs give the same suggestions.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,

    /// Copy the N-th suggestion (1-based) to the clipboard.
    #[arg(
        long = "copy",
        value_name = "INDEX",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub copy: Option<u16>,
}

/// Output format for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Numbered table with availability hints.
    Table,
    /// One name per line.
    List,
    /// JSON object with the inputs and the suggestions.
    Json,
    /// CSV rows.
    Csv,
}

/// Length class as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LengthArg {
    #[value(alias = "s")]
    Short,
    #[value(alias = "m")]
    Medium,
    #[value(alias = "l")]
    Long,
}

impl From<LengthArg> for UsernameLength {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Short => Self::Short,
            LengthArg::Medium => Self::Medium,
            LengthArg::Long => Self::Long,
        }
    }
}

// ── site ──────────────────────────────────────────────────────────────────────

/// Subcommands for `handlegen site`.
#[derive(Debug, Subcommand)]
pub enum SiteCommands {
    /// Print robots.txt.
    Robots,
    /// Print sitemap.xml.
    Sitemap,
    /// Print the JSON-LD structured data.
    Schema {
        /// Wrap the JSON in a `<script type="application/ld+json">` tag.
        #[arg(long = "script")]
        script: bool,
    },
    /// Write every document into a directory.
    Build(SiteBuildArgs),
}

/// Arguments for `handlegen site build`.
#[derive(Debug, Args)]
pub struct SiteBuildArgs {
    /// Output directory; created if missing.
    #[arg(short = 'o', long = "out", value_name = "DIR", default_value = "public")]
    pub out: PathBuf,

    /// Overwrite existing documents.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `handlegen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `handlegen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `handlegen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `site.url`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn length_arg_maps_to_domain() {
        assert_eq!(UsernameLength::from(LengthArg::Short), UsernameLength::Short);
        assert_eq!(UsernameLength::from(LengthArg::Medium), UsernameLength::Medium);
        assert_eq!(UsernameLength::from(LengthArg::Long), UsernameLength::Long);
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "handlegen", "generate", "-k", "nova", "-s", "minimal", "-l", "short", "-n", "5",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.keyword.as_deref(), Some("nova"));
        assert_eq!(args.style.as_deref(), Some("minimal"));
        assert_eq!(args.length, Some(LengthArg::Short));
        assert_eq!(args.count, Some(5));
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn generate_alias_and_short_length() {
        let cli = Cli::parse_from(["handlegen", "g", "-l", "l"]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.length, Some(LengthArg::Long));
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn empty_style_is_accepted() {
        let cli = Cli::parse_from(["handlegen", "generate", "-s", ""]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.style.as_deref(), Some(""));
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(Cli::try_parse_from(["handlegen", "generate", "-n", "0"]).is_err());
    }

    #[test]
    fn site_build_defaults_to_public() {
        let cli = Cli::parse_from(["handlegen", "site", "build"]);
        let Commands::Site(SiteCommands::Build(args)) = cli.command else {
            panic!("expected site build");
        };
        assert_eq!(args.out, PathBuf::from("public"));
        assert!(!args.force);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["handlegen", "--quiet", "--verbose", "styles"]);
        assert!(result.is_err());
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "copy-guard")]
#[command(author, version, about = "Flag functions that pass wide structs by value")]
#[command(long_about = "Reports callables whose receiver, parameters or results copy a \
    composite type wider than a byte threshold.\n\n\
    Exit codes:\n  \
    0 - No wide values passed by value\n  \
    1 - Diagnostics reported\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the report and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report callables that pass wide types by value
    Check(CheckArgs),

    /// Print the computed layout of every composite type
    Layout(LayoutArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

/// Sizing, search-root and config flags shared by `check` and `layout`.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisArgs {
    /// Scope: a directory (absolute or starting with `.`) or a pattern
    /// such as `net/...` matched under the search roots
    pub scope: String,

    /// Threshold in bytes; types strictly larger are wide (overrides config)
    #[arg(long)]
    pub max: Option<u64>,

    /// Bytes per machine word (overrides config)
    #[arg(long)]
    pub word_size: Option<u64>,

    /// Largest field alignment (overrides config)
    #[arg(long)]
    pub max_align: Option<u64>,

    /// Search root for pattern scopes (can be specified multiple times)
    #[arg(long)]
    pub root: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Output format [possible values: text, compact, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

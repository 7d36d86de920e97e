//! CLI argument definitions for the `visa` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "visa",
    version,
    about = "Travel visa questionnaire - inspect content and replay application sessions",
    long_about = "Inspect the travel visa questionnaire and replay scripted sessions.\n\n\
                  Sessions run through the same stores, validation and navigation\n\
                  rules as the interactive views."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags and the settings file).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (defaults to the settings file, then pretty).
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormatArg>,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include applicant answers and dates of birth in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// JSON content override replacing the built-in texts.
    #[arg(long = "content", value_name = "PATH", global = true)]
    pub content: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List destination countries with their question counts.
    Countries,

    /// Show the questions a user would see.
    Questions(QuestionsArgs),

    /// Print the active content as JSON.
    Content,

    /// Replay a TOML session script through the questionnaire.
    Run(RunArgs),
}

#[derive(Parser)]
pub struct QuestionsArgs {
    /// Destination country.
    #[arg(long = "country")]
    pub country: Option<String>,

    /// State of residence.
    #[arg(long = "state")]
    pub state: Option<String>,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Session script to replay.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Print the session report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

//! Travel visa questionnaire CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use visa_cli::logging::{LogConfig, LogFormat, init_logging};
use visa_cli::settings::Settings;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{load_content, run_content, run_countries, run_questions, run_session};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let log_config = match log_config_from_cli(&cli, &settings) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli, &settings) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli, settings: &Settings) -> Result<i32> {
    let content = load_content(cli.content.as_deref(), settings)?;
    match &cli.command {
        Command::Countries => run_countries(&content),
        Command::Questions(args) => run_questions(&content, args),
        Command::Content => run_content(&content)?,
        Command::Run(args) => {
            let submitted = run_session(content, args)?;
            return Ok(if submitted { 0 } else { 1 });
        }
    }
    Ok(0)
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Ok(Settings::default()),
    }
}

/// Build logging configuration with CLI flags taking precedence over the
/// settings file.
fn log_config_from_cli(cli: &Cli, settings: &Settings) -> Result<LogConfig> {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    let settings_level = settings.logging.level_filter()?;
    config.use_env_filter =
        !(cli.verbosity.is_present() || cli.log_level.is_some() || settings_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    } else if let Some(level) = settings_level
        && !cli.verbosity.is_present()
    {
        config.level_filter = level;
    }
    config.format = match cli.log_format {
        Some(LogFormatArg::Pretty) => LogFormat::Pretty,
        Some(LogFormatArg::Compact) => LogFormat::Compact,
        Some(LogFormatArg::Json) => LogFormat::Json,
        None => settings.logging.format.map(LogFormat::from).unwrap_or_default(),
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    Ok(config)
}

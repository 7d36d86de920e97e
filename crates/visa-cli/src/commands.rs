//! Command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};
use visa_core::ContentStore;
use visa_model::Content;
use visa_cli::render::{countries_table, format_question_set, print_session};
use visa_cli::session::{SessionScript, replay};
use visa_cli::settings::Settings;

use crate::cli::{QuestionsArgs, RunArgs};

/// Resolve the active content: `--content` first, then the settings file,
/// then the built-in texts.
pub fn load_content(override_path: Option<&Path>, settings: &Settings) -> Result<Content> {
    let Some(path) = override_path.or(settings.content.path.as_deref()) else {
        return Ok(Content::builtin());
    };
    let content = Content::load(path)
        .with_context(|| format!("failed to load content override {}", path.display()))?;
    info!(path = %path.display(), "using content override");
    Ok(content)
}

pub fn run_countries(content: &Content) {
    println!("{}", countries_table(content));
}

pub fn run_questions(content: &Content, args: &QuestionsArgs) {
    if let Some(country) = &args.country
        && !content.countries.contains(country)
    {
        warn!(country = %country, "country is not offered by the active content");
    }
    println!(
        "{}",
        format_question_set(content, args.country.as_deref(), args.state.as_deref())
    );
}

pub fn run_content(content: &Content) -> Result<()> {
    let json = serde_json::to_string_pretty(content).context("failed to serialize content")?;
    println!("{json}");
    Ok(())
}

/// Replay a session script. Returns whether the application was submitted.
pub fn run_session(content: Content, args: &RunArgs) -> Result<bool> {
    let script = SessionScript::load(&args.script)?;
    let report = replay(&script, ContentStore::new(content))?;
    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize session report")?;
        println!("{json}");
    } else {
        print_session(&report);
    }
    Ok(report.submitted)
}

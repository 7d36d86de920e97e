//! Scripted sessions for `visa run`.
//!
//! A session script is a TOML file describing what a user picks on each
//! view. Replaying it drives the same navigator the views use, so every
//! reset and redirect happens exactly as it would interactively.
//!
//! ```toml
//! country = "USA"
//! state = "California"
//! agree = true
//!
//! [dob]
//! day = "4"
//! month = "July"
//! year = "1990"
//!
//! [answers]
//! "Do you have a valid passport?" = true
//!
//! [verification]
//! "Is the Grand Canyon located in Arizona?" = true
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use visa_core::{ContentStore, Navigator, QuestionsStore, Route, SubmitOutcome};
use visa_model::{DateOfBirth, DobField};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionScript {
    pub country: Option<String>,
    pub state: Option<String>,
    pub dob: DateOfBirth,
    /// Yes/no answers keyed by question text.
    pub answers: BTreeMap<String, bool>,
    /// Verification quiz answers keyed by question text.
    pub verification: BTreeMap<String, bool>,
    pub agree: bool,
}

impl SessionScript {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read session script {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("failed to parse session script {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

/// Which view a step was taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Questions,
    Verification,
    Terms,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Questions => "Questions",
            Self::Verification => "Verification",
            Self::Terms => "Terms",
        }
    }
}

/// Outcome of advancing past one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub stage: Stage,
    pub passed: bool,
    /// Route shown after the step.
    pub route: Route,
    /// Errors shown to the user, or the success message.
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub steps: Vec<StepRecord>,
    pub submitted: bool,
    pub final_route: Route,
}

/// Replay `script` against a fresh session over `content`.
///
/// Stops at the first view that refuses to advance.
pub fn replay(script: &SessionScript, content: ContentStore) -> Result<SessionReport> {
    let store = QuestionsStore::new(content.clone());
    let mut navigator = Navigator::new(content, store);
    let mut steps = Vec::new();

    fill_questions(&navigator, script)?;
    let passed = navigator.advance_from_questions()?;
    let messages = if passed {
        Vec::new()
    } else {
        question_messages(&navigator)?
    };
    steps.push(record(&navigator, Stage::Questions, passed, messages));
    if !passed {
        return Ok(finish(&navigator, steps, false));
    }

    let quiz = navigator.verification_mut()?;
    for (question, yes) in &script.verification {
        quiz.answer(question, *yes);
    }
    let passed = navigator.advance_from_verification()?;
    let messages = if passed {
        Vec::new()
    } else {
        vec![navigator.verification()?.error().to_string()]
    };
    steps.push(record(&navigator, Stage::Verification, passed, messages));
    if !passed {
        return Ok(finish(&navigator, steps, false));
    }

    navigator.terms_mut()?.set_agreed(script.agree);
    let (submitted, message) = match navigator.submit_terms()? {
        SubmitOutcome::Submitted { message } => (true, message),
        SubmitOutcome::Rejected { error } => (false, error),
    };
    steps.push(record(&navigator, Stage::Terms, submitted, vec![message]));
    Ok(finish(&navigator, steps, submitted))
}

fn fill_questions(navigator: &Navigator, script: &SessionScript) -> Result<()> {
    let home = navigator.home()?;
    if let Some(country) = &script.country {
        home.select_country(country);
    }
    if let Some(state) = &script.state {
        home.choose_state(state);
    }
    for field in DobField::all() {
        let value = script.dob.get(*field);
        if !value.is_empty() {
            home.choose_dob_part(*field, value);
        }
    }
    for (question, yes) in &script.answers {
        home.answer(question, *yes);
    }
    debug!(answers = script.answers.len(), "questions filled");
    Ok(())
}

fn question_messages(navigator: &Navigator) -> Result<Vec<String>> {
    let home = navigator.home()?;
    let mut messages = Vec::new();
    let age_error = home.state().age_error;
    if !age_error.is_empty() {
        messages.push(age_error);
    }
    messages.extend(home.error_messages());
    Ok(messages)
}

fn record(navigator: &Navigator, stage: Stage, passed: bool, messages: Vec<String>) -> StepRecord {
    StepRecord {
        stage,
        passed,
        route: navigator.route(),
        messages,
    }
}

fn finish(navigator: &Navigator, steps: Vec<StepRecord>, submitted: bool) -> SessionReport {
    let final_route = navigator.route();
    info!(submitted, route = %final_route, "session replayed");
    SessionReport {
        steps,
        submitted,
        final_route,
    }
}

//! Replaying session scripts through the navigator.

use std::io::Write;

use tempfile::NamedTempFile;
use visa_cli::session::{SessionScript, Stage, replay};
use visa_cli::settings::{LogFormatSetting, Settings};
use visa_core::{ContentStore, Route};

const USA_SCRIPT: &str = r#"
country = "USA"
state = "Texas"
agree = true

[answers]
"Do you have a valid passport?" = true
"Have you traveled internationally before?" = false
"Are you over 18 years old?" = true
"Do you need a visa for entry?" = true
"Have you completed ESTA registration?" = true

[verification]
"Is the Grand Canyon located in Arizona?" = true
"Is Washington D.C. the capital of the United States?" = true
"#;

fn script(raw: &str) -> SessionScript {
    SessionScript::from_toml_str(raw).unwrap()
}

#[test]
fn complete_script_is_submitted() {
    let report = replay(&script(USA_SCRIPT), ContentStore::builtin()).unwrap();

    assert!(report.submitted);
    assert_eq!(report.final_route, Route::Home);
    let stages: Vec<_> = report.steps.iter().map(|step| step.stage).collect();
    assert_eq!(stages, [Stage::Questions, Stage::Verification, Stage::Terms]);
    assert_eq!(report.steps[2].messages, ["Application submitted successfully!"]);
}

#[test]
fn missing_answers_stop_on_questions() {
    let raw = r#"
country = "UK"
state = "Florida"

[answers]
"Do you have a valid passport?" = true
"#;
    let report = replay(&script(raw), ContentStore::builtin()).unwrap();

    assert!(!report.submitted);
    assert_eq!(report.final_route, Route::Home);
    assert_eq!(report.steps.len(), 1);
    assert_eq!(
        report.steps[0].messages,
        [
            "Please answer: Have you traveled internationally before?",
            "Please answer: Are you over 18 years old?",
            "Please answer: Do you have proof of accommodation?",
            "Please answer: Have you booked a return ticket?",
        ]
    );
}

#[test]
fn under_age_applicant_sees_age_error() {
    let raw = USA_SCRIPT.replace(
        "\"Are you over 18 years old?\" = true",
        "\"Are you over 18 years old?\" = false",
    );
    let report = replay(&script(&raw), ContentStore::builtin()).unwrap();

    assert!(!report.submitted);
    assert_eq!(
        report.steps[0].messages,
        ["You must be at least 18 years old to proceed."]
    );
}

#[test]
fn california_script_needs_complete_dob() {
    let raw = USA_SCRIPT.replace("state = \"Texas\"", "state = \"California\"");
    let report = replay(&script(&raw), ContentStore::builtin()).unwrap();
    assert_eq!(
        report.steps[0].messages,
        ["Please enter your complete date of birth."]
    );

    let raw = format!("{raw}\n[dob]\nday = \"4\"\nmonth = \"July\"\nyear = \"1990\"\n");
    let report = replay(&script(&raw), ContentStore::builtin()).unwrap();
    assert!(report.submitted);
}

#[test]
fn unanswered_quiz_stops_on_verification() {
    let raw = USA_SCRIPT.replace(
        "\"Is Washington D.C. the capital of the United States?\" = true\n",
        "",
    );
    let report = replay(&script(&raw), ContentStore::builtin()).unwrap();

    assert!(!report.submitted);
    assert_eq!(report.final_route, Route::Verification);
    assert_eq!(
        report.steps[1].messages,
        ["Please answer all verification questions to proceed."]
    );
}

#[test]
fn terms_not_agreed_stays_on_terms() {
    let raw = USA_SCRIPT.replace("agree = true", "agree = false");
    let report = replay(&script(&raw), ContentStore::builtin()).unwrap();

    assert!(!report.submitted);
    assert_eq!(report.final_route, Route::Terms);
    assert_eq!(
        report.steps[2].messages,
        ["Please agree to the terms and conditions to proceed."]
    );
}

#[test]
fn script_loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(USA_SCRIPT.as_bytes()).unwrap();

    let loaded = SessionScript::load(file.path()).unwrap();
    assert_eq!(loaded.country.as_deref(), Some("USA"));
    assert_eq!(loaded.answers.len(), 5);
    assert!(loaded.agree);
}

#[test]
fn malformed_script_reports_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"country = [").unwrap();

    let error = SessionScript::load(file.path()).unwrap_err();
    assert!(error.to_string().contains("failed to parse session script"));
}

#[test]
fn settings_resolve_content_path_next_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visa.toml");
    std::fs::write(
        &path,
        "[content]\npath = \"content.json\"\n\n[logging]\nformat = \"compact\"\n",
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.content.path, Some(dir.path().join("content.json")));
    assert_eq!(settings.logging.format, Some(LogFormatSetting::Compact));
    assert_eq!(settings.logging.level, None);
}

//! Verification quiz and terms acceptance checks.

use std::collections::BTreeMap;

use visa_model::Content;

/// Shown when the applicant submits without ticking the agreement box.
pub const TERMS_NOT_AGREED: &str = "Please agree to the terms and conditions to proceed.";

/// True when every quiz question has a yes/no answer. The answers themselves
/// are not graded.
pub fn all_verified(questions: &[String], answers: &BTreeMap<String, bool>) -> bool {
    questions
        .iter()
        .all(|question| answers.contains_key(question))
}

/// The quiz error to show, if any.
pub fn verification_error(
    content: &Content,
    questions: &[String],
    answers: &BTreeMap<String, bool>,
) -> Option<String> {
    if all_verified(questions, answers) {
        None
    } else {
        Some(content.verification_page.error_messages.required.clone())
    }
}

/// The terms error to show, if any.
pub fn terms_error(agreed: bool) -> Option<&'static str> {
    (!agreed).then_some(TERMS_NOT_AGREED)
}

//! Full-form validation run when the user advances past the questions.

use serde::Serialize;
use tracing::debug;
use visa_model::{AnswerValue, Answers, COUNTRY_ERROR_KEY, Content, DateOfBirth, ErrorMap};

use crate::questions::{all_questions, requires_dob};

/// Current selections fed to [`validate_form`].
#[derive(Debug, Clone, Copy)]
pub struct FormInput<'a> {
    pub country: &'a str,
    pub state: &'a str,
    pub dob: &'a DateOfBirth,
    pub answers: &'a Answers,
}

/// Result of a full validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Question and field errors, keyed by question text or `"country"`.
    pub errors: ErrorMap,
    /// Age error, empty when the age answer is not `false`.
    pub age_error: String,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.age_error.is_empty()
    }

    /// Error messages in the order they were raised, followed by the age error.
    pub fn messages(&self) -> Vec<&str> {
        let mut messages: Vec<&str> = self.errors.values().map(String::as_str).collect();
        if !self.age_error.is_empty() {
            messages.push(&self.age_error);
        }
        messages
    }
}

/// Immediate age check: the configured message when the applicant is not
/// over 18.
pub fn check_age(content: &Content, is_over_18: bool) -> Option<String> {
    (!is_over_18).then(|| content.error_messages.age.clone())
}

/// Validate the whole form.
///
/// Rules run in order and the first rule to populate a key keeps it:
/// missing country, age answered `false`, missing state, incomplete
/// California date of birth, then one "please answer" error per unanswered
/// question.
pub fn validate_form(content: &Content, input: &FormInput<'_>) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();
    let messages = &content.error_messages;

    if input.country.is_empty() {
        outcome
            .errors
            .insert(COUNTRY_ERROR_KEY.to_string(), messages.country.clone());
    }

    if input.answers.get(content.age_question()) == Some(&AnswerValue::Bool(false)) {
        outcome.age_error = messages.age.clone();
    }

    if input.state.is_empty() {
        outcome
            .errors
            .insert(content.state_question().to_string(), messages.state.clone());
    }

    if requires_dob(input.state) && !input.dob.is_complete() {
        outcome
            .errors
            .insert(content.dob_question().to_string(), messages.dob.clone());
    }

    for question in all_questions(content, input.country) {
        if is_unanswered(content, input, &question) {
            let message = content.required_message(&question);
            outcome.errors.entry(question).or_insert(message);
        }
    }

    debug!(
        country = input.country,
        errors = outcome.errors.len(),
        age_error = !outcome.age_error.is_empty(),
        "validated questionnaire"
    );
    outcome
}

/// Only a never-set answer is unanswered for yes/no questions; an explicit
/// `false` counts as answered.
fn is_unanswered(content: &Content, input: &FormInput<'_>, question: &str) -> bool {
    if question == content.state_question() {
        return input.state.is_empty();
    }
    if question == content.dob_question() {
        return requires_dob(input.state)
            && !input.answers.get(question).is_some_and(AnswerValue::is_truthy);
    }
    !input.answers.contains_key(question)
}

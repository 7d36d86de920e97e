//! Tests for the questionnaire validation rules.

use std::collections::BTreeMap;

use proptest::prelude::*;
use visa_model::{AnswerValue, Answers, COUNTRY_ERROR_KEY, Content, DateOfBirth};
use visa_validate::{
    FormInput, all_verified, check_age, question_list_for_state, terms_error, validate_form,
    verification_error,
};

const PASSPORT: &str = "Do you have a valid passport?";
const TRAVEL: &str = "Have you traveled internationally before?";
const AGE: &str = "Are you over 18 years old?";
const STATE: &str = "Select your state of residence:";
const DOB: &str = "Enter your date of birth:";

fn answers(entries: &[(&str, AnswerValue)]) -> Answers {
    entries
        .iter()
        .map(|(question, value)| ((*question).to_string(), value.clone()))
        .collect()
}

fn usa_all_yes() -> Answers {
    answers(&[
        (PASSPORT, true.into()),
        (TRAVEL, true.into()),
        (AGE, true.into()),
        ("Do you need a visa for entry?", true.into()),
        ("Have you completed ESTA registration?", true.into()),
    ])
}

#[test]
fn complete_usa_texas_application_is_valid() {
    let content = Content::builtin();
    let dob = DateOfBirth::default();
    let answers = usa_all_yes();
    let outcome = validate_form(
        &content,
        &FormInput {
            country: "USA",
            state: "Texas",
            dob: &dob,
            answers: &answers,
        },
    );
    assert!(outcome.is_valid(), "{outcome:?}");
    assert!(outcome.errors.is_empty());
    assert!(outcome.age_error.is_empty());
}

#[test]
fn missing_country_uses_configured_message() {
    let content = Content::builtin();
    let dob = DateOfBirth::default();
    let answers = usa_all_yes();
    let outcome = validate_form(
        &content,
        &FormInput {
            country: "",
            state: "Texas",
            dob: &dob,
            answers: &answers,
        },
    );
    assert!(!outcome.is_valid());
    assert_eq!(
        outcome.errors.get(COUNTRY_ERROR_KEY).map(String::as_str),
        Some("Please select a country to proceed.")
    );
}

#[test]
fn false_counts_as_answered_but_unset_does_not() {
    let content = Content::builtin();
    let dob = DateOfBirth::default();
    let mut answers = usa_all_yes();
    answers.insert(PASSPORT.to_string(), false.into());
    answers.remove(TRAVEL);
    let outcome = validate_form(
        &content,
        &FormInput {
            country: "USA",
            state: "Texas",
            dob: &dob,
            answers: &answers,
        },
    );
    assert!(!outcome.errors.contains_key(PASSPORT));
    assert_eq!(
        outcome.errors.get(TRAVEL).map(String::as_str),
        Some("Please answer: Have you traveled internationally before?")
    );
    assert_eq!(outcome.errors.len(), 1);
}

#[test]
fn age_false_fails_without_question_error() {
    let content = Content::builtin();
    let dob = DateOfBirth::default();
    let mut answers = usa_all_yes();
    answers.insert(AGE.to_string(), false.into());
    let outcome = validate_form(
        &content,
        &FormInput {
            country: "USA",
            state: "Texas",
            dob: &dob,
            answers: &answers,
        },
    );
    assert!(!outcome.is_valid());
    assert!(outcome.errors.is_empty());
    assert_eq!(
        outcome.age_error,
        "You must be at least 18 years old to proceed."
    );
}

#[test]
fn missing_state_keeps_specific_message() {
    let content = Content::builtin();
    let dob = DateOfBirth::default();
    let answers = usa_all_yes();
    let outcome = validate_form(
        &content,
        &FormInput {
            country: "USA",
            state: "",
            dob: &dob,
            answers: &answers,
        },
    );
    // The state rule runs before the unanswered-question sweep and wins.
    assert_eq!(
        outcome.errors.get(STATE).map(String::as_str),
        Some("Please select your state of residence.")
    );
    assert_eq!(outcome.errors.len(), 1);
}

#[test]
fn california_requires_complete_dob() {
    let content = Content::builtin();
    let dob = DateOfBirth::new("12", "March", "");
    let mut answers = usa_all_yes();
    answers.insert(DOB.to_string(), AnswerValue::Date(dob.clone()));
    let outcome = validate_form(
        &content,
        &FormInput {
            country: "USA",
            state: "California",
            dob: &dob,
            answers: &answers,
        },
    );
    assert!(!outcome.is_valid());
    assert_eq!(
        outcome.errors.get(DOB).map(String::as_str),
        Some("Please enter your complete date of birth.")
    );

    let dob = DateOfBirth::new("12", "March", "1990");
    let outcome = validate_form(
        &content,
        &FormInput {
            country: "USA",
            state: "California",
            dob: &dob,
            answers: &answers,
        },
    );
    assert!(outcome.is_valid(), "{outcome:?}");
}

#[test]
fn country_specific_questions_follow_country() {
    let content = Content::builtin();
    let dob = DateOfBirth::default();
    let answers = usa_all_yes();
    let outcome = validate_form(
        &content,
        &FormInput {
            country: "UK",
            state: "Florida",
            dob: &dob,
            answers: &answers,
        },
    );
    let keys: Vec<&str> = outcome.errors.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "Do you have proof of accommodation?",
            "Have you booked a return ticket?"
        ]
    );
}

#[test]
fn unknown_country_has_no_extra_questions() {
    let content = Content::builtin();
    let dob = DateOfBirth::default();
    let answers = usa_all_yes();
    let outcome = validate_form(
        &content,
        &FormInput {
            country: "Narnia",
            state: "Texas",
            dob: &dob,
            answers: &answers,
        },
    );
    assert!(outcome.is_valid());
}

#[test]
fn immediate_age_check() {
    let content = Content::builtin();
    assert_eq!(
        check_age(&content, false).as_deref(),
        Some("You must be at least 18 years old to proceed.")
    );
    assert_eq!(check_age(&content, true), None);
}

#[test]
fn dob_question_only_for_california() {
    let content = Content::builtin();
    assert_eq!(
        question_list_for_state(&content, "California").last().map(String::as_str),
        Some(DOB)
    );
    assert_eq!(question_list_for_state(&content, "california").len(), 4);
}

#[test]
fn verification_requires_every_answer() {
    let content = Content::builtin();
    let questions = content.verification_questions("UK").to_vec();
    let mut answers = BTreeMap::new();
    assert!(!all_verified(&questions, &answers));
    answers.insert(questions[0].clone(), false);
    assert_eq!(
        verification_error(&content, &questions, &answers).as_deref(),
        Some("Please answer all verification questions to proceed.")
    );
    answers.insert(questions[1].clone(), true);
    assert_eq!(verification_error(&content, &questions, &answers), None);
}

#[test]
fn terms_must_be_agreed() {
    assert!(terms_error(false).is_some());
    assert_eq!(terms_error(true), None);
}

proptest! {
    #[test]
    fn non_california_states_never_ask_for_dob(state in "\\PC{0,24}") {
        prop_assume!(state != "California");
        let content = Content::builtin();
        let questions = question_list_for_state(&content, &state);
        prop_assert!(!questions.iter().any(|q| q == DOB));
    }

    #[test]
    fn california_with_missing_dob_part_fails(
        day in prop::option::of("[1-9]"),
        month in prop::option::of("[A-Z][a-z]{2,8}"),
        year in prop::option::of("19[0-9]{2}"),
    ) {
        prop_assume!(day.is_none() || month.is_none() || year.is_none());
        let content = Content::builtin();
        let dob = DateOfBirth::new(
            day.unwrap_or_default(),
            month.unwrap_or_default(),
            year.unwrap_or_default(),
        );
        let answers = usa_all_yes();
        let outcome = validate_form(&content, &FormInput {
            country: "USA",
            state: "California",
            dob: &dob,
            answers: &answers,
        });
        prop_assert!(!outcome.is_valid());
        prop_assert!(outcome.errors.contains_key(DOB));
    }
}

//! Tests for view transitions and the resets they trigger.

use visa_core::{
    ContentStore, FlowError, Navigator, QuestionsStore, Route, SubmitOutcome,
};
use visa_model::{DateOptions, DobField};

const AGE: &str = "Are you over 18 years old?";

fn navigator() -> Navigator {
    let content = ContentStore::builtin();
    let store = QuestionsStore::with_date_options(content.clone(), DateOptions::for_year(2026));
    Navigator::new(content, store)
}

fn fill_usa_questions(nav: &Navigator) {
    let home = nav.home().expect("home view");
    home.select_country("USA");
    home.choose_state("Texas");
    let state = home.state();
    for question in state
        .common_questions
        .iter()
        .chain(&state.country_specific_questions)
    {
        if !home.is_state_question(question) {
            home.answer(question, true);
        }
    }
}

fn answer_quiz(nav: &mut Navigator) {
    let quiz = nav.verification_mut().expect("verification view");
    for question in quiz.questions().to_vec() {
        quiz.answer(&question, true);
    }
}

#[test]
fn happy_path_submits_application() {
    let mut nav = navigator();
    fill_usa_questions(&nav);

    assert_eq!(nav.advance_from_questions(), Ok(true));
    assert_eq!(nav.route(), Route::Verification);
    assert_eq!(nav.verification().unwrap().selected_country(), "USA");
    assert_eq!(nav.verification().unwrap().questions().len(), 2);

    answer_quiz(&mut nav);
    assert_eq!(nav.advance_from_verification(), Ok(true));
    assert_eq!(nav.route(), Route::Terms);
    // Everything but the country was reset on the way to terms.
    assert_eq!(nav.store().selected_country().get(), "USA");
    assert_eq!(nav.store().selected_state().get(), "");
    assert!(nav.store().answers().get().is_empty());

    nav.terms_mut().unwrap().set_agreed(true);
    assert_eq!(
        nav.submit_terms(),
        Ok(SubmitOutcome::Submitted {
            message: "Application submitted successfully!".to_string()
        })
    );
    assert_eq!(nav.route(), Route::Home);
}

#[test]
fn invalid_questions_stay_home_with_errors() {
    let mut nav = navigator();
    nav.home().unwrap().select_country("UK");

    assert_eq!(nav.advance_from_questions(), Ok(false));
    assert_eq!(nav.route(), Route::Home);
    let messages = nav.home().unwrap().error_messages();
    assert!(messages.contains(&"Please select your state of residence.".to_string()));
    assert!(messages.contains(&"Please answer: Have you booked a return ticket?".to_string()));
}

#[test]
fn errors_are_listed_in_the_order_rules_raise_them() {
    let mut nav = navigator();
    nav.home()
        .unwrap()
        .answer("Do you have a valid passport?", true);

    assert_eq!(nav.advance_from_questions(), Ok(false));
    assert_eq!(
        nav.home().unwrap().error_messages(),
        [
            "Please select a country to proceed.",
            "Please select your state of residence.",
            "Please answer: Have you traveled internationally before?",
            "Please answer: Are you over 18 years old?",
        ]
    );

    // Clearing one error leaves the others in place.
    nav.home().unwrap().choose_state("Texas");
    assert_eq!(
        nav.home().unwrap().error_messages(),
        [
            "Please select a country to proceed.",
            "Please answer: Have you traveled internationally before?",
            "Please answer: Are you over 18 years old?",
        ]
    );
}

#[test]
fn home_view_follows_content_replacement() {
    let nav = navigator();
    let home = nav.home().unwrap();
    home.select_country("USA");
    home.choose_state("Texas");

    let mut content = nav.content().snapshot().as_ref().clone();
    content
        .country_specific_questions
        .questions
        .insert("USA".to_string(), vec!["Do you hold a green card?".to_string()]);
    content.common_questions.questions.travel = "Have you flown abroad?".to_string();
    nav.content().replace(content);

    let state = home.state();
    assert_eq!(state.country_specific_questions, ["Do you hold a green card?"]);
    assert_eq!(state.common_questions[1], "Have you flown abroad?");
}

#[test]
fn under_age_applicant_cannot_advance() {
    let mut nav = navigator();
    fill_usa_questions(&nav);
    nav.home().unwrap().answer(AGE, false);

    let state = nav.home().unwrap().state();
    assert!(!state.can_proceed);
    assert_eq!(state.age_error, "You must be at least 18 years old to proceed.");
    assert_eq!(nav.advance_from_questions(), Ok(false));
}

#[test]
fn leaving_home_elsewhere_resets_everything() {
    let mut nav = navigator();
    fill_usa_questions(&nav);

    assert_eq!(nav.navigate(Route::Terms), Route::Terms);
    assert_eq!(nav.store().selected_country().get(), "");
    assert!(nav.store().answers().get().is_empty());
}

#[test]
fn verification_without_country_redirects_home() {
    let mut nav = navigator();
    assert_eq!(nav.navigate_path("/verification"), Route::Home);
    assert!(nav.home().is_ok());
}

#[test]
fn unknown_path_lands_home() {
    let mut nav = navigator();
    fill_usa_questions(&nav);
    assert_eq!(nav.advance_from_questions(), Ok(true));
    assert_eq!(nav.navigate_path("/nowhere"), Route::Home);
}

#[test]
fn quiz_requires_every_answer() {
    let mut nav = navigator();
    fill_usa_questions(&nav);
    nav.advance_from_questions().unwrap();

    let quiz = nav.verification_mut().unwrap();
    let first = quiz.questions()[0].clone();
    quiz.answer(&first, false);
    assert_eq!(nav.advance_from_verification(), Ok(false));
    assert_eq!(
        nav.verification().unwrap().error(),
        "Please answer all verification questions to proceed."
    );

    // Answering clears the error; a "no" still counts as an answer.
    answer_quiz(&mut nav);
    assert_eq!(nav.verification().unwrap().error(), "");
    assert_eq!(nav.advance_from_verification(), Ok(true));
}

#[test]
fn back_from_verification_keeps_selections() {
    let mut nav = navigator();
    fill_usa_questions(&nav);
    nav.advance_from_questions().unwrap();

    nav.back_from_verification().unwrap();
    assert_eq!(nav.route(), Route::Home);
    let state = nav.home().unwrap().state();
    assert_eq!(state.selected_country, "USA");
    assert_eq!(state.selected_state, "Texas");
    assert_eq!(state.country_specific_questions.len(), 2);
}

#[test]
fn terms_require_agreement() {
    let mut nav = navigator();
    fill_usa_questions(&nav);
    nav.advance_from_questions().unwrap();
    answer_quiz(&mut nav);
    nav.advance_from_verification().unwrap();

    assert_eq!(
        nav.submit_terms(),
        Ok(SubmitOutcome::Rejected {
            error: "Please agree to the terms and conditions to proceed.".to_string()
        })
    );
    assert_eq!(nav.route(), Route::Terms);
    assert_eq!(nav.terms().unwrap().terms().len(), 5);

    nav.back_from_terms().unwrap();
    assert_eq!(nav.route(), Route::Verification);
    assert_eq!(nav.verification().unwrap().selected_country(), "USA");
}

#[test]
fn actions_on_the_wrong_view_are_rejected() {
    let mut nav = navigator();
    assert_eq!(
        nav.advance_from_verification(),
        Err(FlowError::WrongView {
            expected: Route::Verification,
            actual: Route::Home
        })
    );
    assert!(nav.submit_terms().is_err());
}

#[test]
fn california_flow_needs_date_of_birth() {
    let mut nav = navigator();
    fill_usa_questions(&nav);
    {
        let home = nav.home().unwrap();
        home.choose_state("California");
        assert!(home.show_dob_question());
        assert_eq!(home.state().common_questions.len(), 5);
    }
    assert_eq!(nav.advance_from_questions(), Ok(false));
    assert!(nav
        .home()
        .unwrap()
        .error_messages()
        .contains(&"Please enter your complete date of birth.".to_string()));

    {
        let home = nav.home().unwrap();
        home.choose_dob_part(DobField::Month, "July");
        home.choose_dob_part(DobField::Day, "4");
        home.choose_dob_part(DobField::Year, "1990");
        assert!(home.state().selected_dob.is_complete());
        assert!(home.error_messages().is_empty());
    }
    assert_eq!(nav.advance_from_questions(), Ok(true));
}

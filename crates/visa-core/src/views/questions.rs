//! Home view model: country selection plus the question flow.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use visa_model::{AnswerValue, Answers, CALIFORNIA, DateOfBirth, DobField, ErrorMap};
use visa_validate::{country_specific_questions, question_list_for_state};

use crate::observable::Subscription;
use crate::questions_store::QuestionsStore;

/// Everything the home view renders, kept current by store subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFlowState {
    pub selected_country: String,
    pub selected_state: String,
    pub selected_dob: DateOfBirth,
    /// Common questions, plus the date-of-birth question for California.
    pub common_questions: Vec<String>,
    pub country_specific_questions: Vec<String>,
    pub answers: Answers,
    pub age_error: String,
    pub question_errors: ErrorMap,
    pub can_proceed: bool,
}

/// View model for the home page.
///
/// Question lists follow both the selections and content replacements.
pub struct QuestionFlowView {
    store: QuestionsStore,
    state: Rc<RefCell<QuestionFlowState>>,
    _subscriptions: Vec<Subscription>,
}

impl QuestionFlowView {
    pub fn new(store: QuestionsStore) -> Self {
        let state = Rc::new(RefCell::new(QuestionFlowState::default()));
        let mut subscriptions = Vec::new();

        let view = Rc::clone(&state);
        let selections = store.clone();
        subscriptions.push(store.content().subscribe(move |content| {
            let country = selections.selected_country().get();
            let selected_state = selections.selected_state().get();
            let mut view = view.borrow_mut();
            view.common_questions = question_list_for_state(content, &selected_state);
            view.country_specific_questions = country_specific_questions(content, &country);
        }));

        let view = Rc::clone(&state);
        let lookup = store.clone();
        subscriptions.push(store.selected_country().subscribe(move |country| {
            let questions = lookup.country_specific_questions(country);
            let mut view = view.borrow_mut();
            view.selected_country = country.clone();
            view.country_specific_questions = questions;
        }));

        let view = Rc::clone(&state);
        let lookup = store.clone();
        subscriptions.push(store.selected_state().subscribe(move |selected| {
            let questions = lookup.question_list_for_state(selected);
            let mut view = view.borrow_mut();
            view.selected_state = selected.clone();
            view.common_questions = questions;
        }));

        let view = Rc::clone(&state);
        subscriptions.push(
            store
                .selected_dob()
                .subscribe(move |dob| view.borrow_mut().selected_dob = dob.clone()),
        );

        let view = Rc::clone(&state);
        subscriptions.push(
            store
                .answers()
                .subscribe(move |answers| view.borrow_mut().answers = answers.clone()),
        );

        let view = Rc::clone(&state);
        subscriptions.push(
            store
                .age_error()
                .subscribe(move |error| view.borrow_mut().age_error = error.clone()),
        );

        let view = Rc::clone(&state);
        subscriptions.push(
            store
                .question_errors()
                .subscribe(move |errors| view.borrow_mut().question_errors = errors.clone()),
        );

        let view = Rc::clone(&state);
        subscriptions.push(
            store
                .can_proceed()
                .subscribe(move |can_proceed| view.borrow_mut().can_proceed = *can_proceed),
        );

        Self {
            store,
            state,
            _subscriptions: subscriptions,
        }
    }

    /// Snapshot of the rendered state.
    pub fn state(&self) -> QuestionFlowState {
        self.state.borrow().clone()
    }

    pub fn store(&self) -> &QuestionsStore {
        &self.store
    }

    pub fn select_country(&self, country: &str) {
        self.store.set_selected_country(country);
    }

    /// Pick a state; the state name is also recorded as the state question's
    /// answer.
    pub fn choose_state(&self, state: &str) {
        self.store.set_selected_state(state);
        let content = self.store.content().snapshot();
        self.store
            .set_answer(content.state_question(), AnswerValue::from(state));
    }

    /// Pick one part of the date of birth; the whole date is recorded as the
    /// date-of-birth question's answer.
    pub fn choose_dob_part(&self, field: DobField, value: &str) {
        let dob = self.store.selected_dob().get().with(field, value);
        self.store.set_selected_dob(dob.clone());
        let content = self.store.content().snapshot();
        self.store
            .set_answer(content.dob_question(), AnswerValue::Date(dob));
    }

    /// Answer a yes/no question.
    pub fn answer(&self, question: &str, yes: bool) {
        self.store.set_answer(question, yes);
    }

    /// Validate before advancing. The caller navigates on success.
    pub fn next(&self) -> bool {
        let valid = self.store.validate_current();
        debug!(valid, "questions submitted");
        valid
    }

    /// All question error messages, in the order validation raised them.
    pub fn error_messages(&self) -> Vec<String> {
        self.state.borrow().question_errors.values().cloned().collect()
    }

    pub fn show_dob_question(&self) -> bool {
        self.state.borrow().selected_state == CALIFORNIA
    }

    pub fn is_state_question(&self, question: &str) -> bool {
        question == self.store.content().snapshot().state_question()
    }

    pub fn is_dob_question(&self, question: &str) -> bool {
        question == self.store.content().snapshot().dob_question()
    }
}

//! Answer and selection store.
//!
//! [`QuestionsStore`] owns everything the user has picked so far (country,
//! state, date of birth, answers) and the validation state derived from it
//! (question errors, age error, can-proceed flag). Each piece is an
//! [`Observable`] exposed read-only; all writes go through the command
//! methods so the error bookkeeping stays consistent.

use std::rc::Rc;

use tracing::{debug, warn};
use visa_model::{AnswerValue, Answers, DateOfBirth, DateOptions, ErrorMap};
use visa_validate::{FormInput, check_age, requires_dob, validate_form};

use crate::content_store::ContentStore;
use crate::observable::{Observable, ReadSignal};
use crate::privacy::redact_value;

/// Session-scoped selection state shared by every view.
///
/// Cloning the store creates a new handle to the same state.
#[derive(Debug, Clone)]
pub struct QuestionsStore {
    content: ContentStore,
    selected_country: Observable<String>,
    selected_state: Observable<String>,
    selected_dob: Observable<DateOfBirth>,
    answers: Observable<Answers>,
    age_error: Observable<String>,
    question_errors: Observable<ErrorMap>,
    can_proceed: Observable<bool>,
    date_options: Rc<DateOptions>,
}

impl QuestionsStore {
    pub fn new(content: ContentStore) -> Self {
        Self::with_date_options(content, DateOptions::current())
    }

    /// Store with a fixed date-of-birth option list.
    pub fn with_date_options(content: ContentStore, date_options: DateOptions) -> Self {
        Self {
            content,
            selected_country: Observable::new(String::new()),
            selected_state: Observable::new(String::new()),
            selected_dob: Observable::new(DateOfBirth::default()),
            answers: Observable::new(Answers::new()),
            age_error: Observable::new(String::new()),
            question_errors: Observable::new(ErrorMap::new()),
            can_proceed: Observable::new(true),
            date_options: Rc::new(date_options),
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn selected_country(&self) -> ReadSignal<String> {
        self.selected_country.read_only()
    }

    pub fn selected_state(&self) -> ReadSignal<String> {
        self.selected_state.read_only()
    }

    pub fn selected_dob(&self) -> ReadSignal<DateOfBirth> {
        self.selected_dob.read_only()
    }

    pub fn answers(&self) -> ReadSignal<Answers> {
        self.answers.read_only()
    }

    pub fn age_error(&self) -> ReadSignal<String> {
        self.age_error.read_only()
    }

    pub fn question_errors(&self) -> ReadSignal<ErrorMap> {
        self.question_errors.read_only()
    }

    pub fn can_proceed(&self) -> ReadSignal<bool> {
        self.can_proceed.read_only()
    }

    /// States offered by the state select.
    pub fn states(&self) -> Vec<String> {
        self.content.snapshot().states.clone()
    }

    pub fn date_options(&self) -> &DateOptions {
        &self.date_options
    }

    // =========================================================================
    // DERIVED QUERIES
    // =========================================================================

    /// Common questions for `state`, with the date-of-birth question appended
    /// for California.
    pub fn question_list_for_state(&self, state: &str) -> Vec<String> {
        visa_validate::question_list_for_state(&self.content.snapshot(), state)
    }

    pub fn country_specific_questions(&self, country: &str) -> Vec<String> {
        visa_validate::country_specific_questions(&self.content.snapshot(), country)
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    /// Select the destination country. Errors for country-specific questions
    /// are dropped; only common-question errors survive.
    pub fn set_selected_country(&self, country: impl Into<String>) {
        let country = country.into();
        debug!(country = %country, "country selected");
        self.selected_country.set(country);
        let content = self.content.snapshot();
        self.question_errors
            .update(|errors| errors.retain(|key, _| content.is_common_question(key)));
    }

    /// Select the state of residence. Leaving California clears the date of
    /// birth and its error.
    pub fn set_selected_state(&self, state: impl Into<String>) {
        let state = state.into();
        debug!(state = %state, "state selected");
        let content = self.content.snapshot();
        let keep_dob = requires_dob(&state);
        self.selected_state.set(state);
        self.question_errors.update(|errors| {
            errors.shift_remove(content.state_question());
            if !keep_dob {
                errors.shift_remove(content.dob_question());
            }
        });
        if !keep_dob {
            self.selected_dob.set(DateOfBirth::default());
        }
    }

    pub fn set_selected_dob(&self, dob: DateOfBirth) {
        debug!(
            day = redact_value(&dob.day),
            month = redact_value(&dob.month),
            year = redact_value(&dob.year),
            "date of birth updated"
        );
        self.selected_dob.set(dob);
        let content = self.content.snapshot();
        self.remove_error(content.dob_question());
    }

    /// Record an answer and clear any error keyed by its question.
    ///
    /// The age question is re-checked immediately: answering `false` raises
    /// the age error and blocks proceeding, answering `true` clears both.
    pub fn set_answer(&self, question: &str, value: impl Into<AnswerValue>) {
        let value = value.into();
        debug!(question, answered = value.is_truthy(), "answer recorded");
        let content = self.content.snapshot();
        if question == content.age_question()
            && let Some(is_over_18) = value.as_bool()
        {
            let age_error = check_age(&content, is_over_18).unwrap_or_default();
            self.age_error.set(age_error);
            self.can_proceed.set(is_over_18);
        }
        self.answers.update(|answers| {
            answers.insert(question.to_string(), value);
        });
        self.remove_error(question);
    }

    /// Same as [`set_answer`](Self::set_answer).
    pub fn update_answer(&self, question: &str, value: impl Into<AnswerValue>) {
        self.set_answer(question, value);
    }

    /// Full validation pass over `answers` and the current selections.
    ///
    /// Publishes the fresh error map and age error whatever the outcome and
    /// returns true iff nothing was flagged.
    pub fn validate_on_next(&self, answers: &Answers) -> bool {
        let content = self.content.snapshot();
        let country = self.selected_country.get();
        let state = self.selected_state.get();
        let dob = self.selected_dob.get();
        let outcome = validate_form(
            &content,
            &FormInput {
                country: &country,
                state: &state,
                dob: &dob,
                answers,
            },
        );
        let valid = outcome.is_valid();
        if !valid {
            warn!(
                errors = outcome.errors.len(),
                age_error = !outcome.age_error.is_empty(),
                "questionnaire incomplete"
            );
        }
        let age_blocked = !outcome.age_error.is_empty();
        self.question_errors.set(outcome.errors);
        self.age_error.set(outcome.age_error);
        self.can_proceed.set(!age_blocked);
        valid
    }

    /// [`validate_on_next`](Self::validate_on_next) over the stored answers.
    pub fn validate_current(&self) -> bool {
        let answers = self.answers.get();
        self.validate_on_next(&answers)
    }

    /// Clear every selection, answer and error.
    pub fn reset_all(&self) {
        debug!("resetting all selections");
        self.selected_country.set(String::new());
        self.clear_except_country();
    }

    /// Clear every selection, answer and error but keep the country.
    pub fn reset_except_country(&self) {
        debug!("resetting selections except country");
        self.clear_except_country();
    }

    fn clear_except_country(&self) {
        self.selected_state.set(String::new());
        self.selected_dob.set(DateOfBirth::default());
        self.answers.set(Answers::new());
        self.age_error.set(String::new());
        self.question_errors.set(ErrorMap::new());
        self.can_proceed.set(true);
    }

    /// Only publishes when the key was present.
    fn remove_error(&self, key: &str) {
        if self.question_errors.with(|errors| errors.contains_key(key)) {
            self.question_errors.update(|errors| {
                errors.shift_remove(key);
            });
        }
    }
}

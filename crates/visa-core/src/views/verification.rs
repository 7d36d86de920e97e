//! Verification quiz view model.

use std::collections::BTreeMap;

use visa_validate::{all_verified, verification_error};

use crate::questions_store::QuestionsStore;

/// Quiz shown for the selected country before the terms page.
#[derive(Debug, Clone)]
pub struct VerificationView {
    store: QuestionsStore,
    selected_country: String,
    questions: Vec<String>,
    answers: BTreeMap<String, bool>,
    error: String,
}

impl VerificationView {
    /// Open the quiz for the currently selected country, or `None` when no
    /// country is selected (the navigator then redirects home).
    pub fn open(store: QuestionsStore) -> Option<Self> {
        let selected_country = store.selected_country().get();
        if selected_country.is_empty() {
            return None;
        }
        let questions = store
            .content()
            .snapshot()
            .verification_questions(&selected_country)
            .to_vec();
        Some(Self {
            store,
            selected_country,
            questions,
            answers: BTreeMap::new(),
            error: String::new(),
        })
    }

    pub fn selected_country(&self) -> &str {
        &self.selected_country
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &BTreeMap<String, bool> {
        &self.answers
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn title(&self) -> String {
        self.store.content().snapshot().verification_page.title.clone()
    }

    pub fn message(&self) -> String {
        self.store
            .content()
            .snapshot()
            .verification_page
            .message
            .clone()
    }

    /// Record an answer and clear the quiz error.
    pub fn answer(&mut self, question: &str, yes: bool) {
        self.answers.insert(question.to_string(), yes);
        self.error.clear();
    }

    pub fn is_valid(&self) -> bool {
        all_verified(&self.questions, &self.answers)
    }

    /// Check the quiz before advancing. On failure the configured error is
    /// shown; the caller navigates on success.
    pub fn next(&mut self) -> bool {
        let content = self.store.content().snapshot();
        match verification_error(&content, &self.questions, &self.answers) {
            Some(error) => {
                self.error = error;
                false
            }
            None => true,
        }
    }
}

//! Terms and conditions view model.

use std::rc::Rc;

use visa_model::Content;
use visa_validate::terms_error;

use crate::content_store::ContentStore;

#[derive(Debug, Clone)]
pub struct TermsView {
    content: Rc<Content>,
    agreed: bool,
    error_message: String,
    success_message: String,
}

impl TermsView {
    pub fn new(content: &ContentStore) -> Self {
        Self {
            content: content.snapshot(),
            agreed: false,
            error_message: String::new(),
            success_message: String::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.content.terms_title
    }

    pub fn terms(&self) -> &[String] {
        &self.content.terms_text
    }

    pub fn agree_text(&self) -> &str {
        &self.content.agree_text
    }

    pub fn agreed(&self) -> bool {
        self.agreed
    }

    pub fn set_agreed(&mut self, agreed: bool) {
        self.agreed = agreed;
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    /// Submit the application. Returns true when the terms were accepted.
    pub fn submit(&mut self) -> bool {
        match terms_error(self.agreed) {
            Some(error) => {
                self.error_message = error.to_string();
                self.success_message.clear();
                false
            }
            None => {
                self.success_message = self.content.success_message.clone();
                self.error_message.clear();
                true
            }
        }
    }
}

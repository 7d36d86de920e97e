//! Question-set derivation.

use visa_model::{CALIFORNIA, Content};

/// Whether the date-of-birth question is asked for `state`.
///
/// Matches the literal state name only; no trimming or case folding.
pub fn requires_dob(state: &str) -> bool {
    state == CALIFORNIA
}

/// Common questions to render for `state`, with the date-of-birth question
/// appended for California.
pub fn question_list_for_state(content: &Content, state: &str) -> Vec<String> {
    let mut questions: Vec<String> = content
        .common_question_list()
        .iter()
        .map(|question| (*question).to_string())
        .collect();
    if requires_dob(state) {
        questions.push(content.dob_question().to_string());
    }
    questions
}

/// Additional questions for the destination `country`.
pub fn country_specific_questions(content: &Content, country: &str) -> Vec<String> {
    content.country_questions(country).to_vec()
}

/// Every question validated on advance: the common questions followed by the
/// country-specific ones. The date-of-birth question is not included.
pub fn all_questions(content: &Content, country: &str) -> Vec<String> {
    let mut questions = question_list_for_state(content, "");
    questions.extend(country_specific_questions(content, country));
    questions
}

//! Display content for the questionnaire.
//!
//! Every string a view renders (question text, labels, error messages,
//! per-country question lists) lives in a single [`Content`] snapshot. The
//! built-in snapshot is hardcoded; an override with the same JSON shape can
//! be loaded from disk.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};

/// The only state for which the date-of-birth question is asked.
pub const CALIFORNIA: &str = "California";

/// Error-map key used when no destination country is selected.
pub const COUNTRY_ERROR_KEY: &str = "country";

/// Complete content snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    // Common content
    pub app_title: String,
    pub header_title: String,
    pub footer_text: String,

    // Home page
    pub home_title: String,
    pub country_select_label: String,
    pub country_placeholder: String,
    pub countries: Vec<String>,

    // Questions page
    pub questions_title: String,
    pub common_questions: CommonQuestions,
    pub country_specific_questions: CountrySpecificQuestions,
    pub states: Vec<String>,
    pub button_labels: ButtonLabels,
    pub error_messages: ErrorMessages,
    pub date_labels: DateLabels,

    // Terms page
    pub terms_title: String,
    pub terms_text: Vec<String>,
    pub agree_text: String,
    pub success_message: String,

    pub verification_page: VerificationPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonQuestions {
    pub title: String,
    pub questions: CommonQuestionTexts,
}

/// Text of each common question. The text doubles as the answer and
/// error-map key for that question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonQuestionTexts {
    pub passport: String,
    pub travel: String,
    pub age: String,
    pub state: String,
    pub dob: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySpecificQuestions {
    pub title: String,
    pub questions: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabels {
    pub yes: String,
    pub no: String,
    pub next: String,
    pub submit: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessages {
    /// Prefix for unanswered questions; the question text is appended.
    pub required: String,
    pub age: String,
    pub state: String,
    pub dob: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateLabels {
    pub month: String,
    pub day: String,
    pub year: String,
    pub placeholder: DatePlaceholders,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePlaceholders {
    pub month: String,
    pub day: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationPage {
    pub title: String,
    pub message: String,
    pub questions: BTreeMap<String, Vec<String>>,
    pub error_messages: VerificationErrorMessages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationErrorMessages {
    pub required: String,
}

impl Content {
    /// Load a content override from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
        let content = Self::from_json_str(&raw)?;
        debug!(
            path = %path.display(),
            countries = content.countries.len(),
            "loaded content override"
        );
        Ok(content)
    }

    /// Parse and check content from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let content: Content = serde_json::from_str(raw)?;
        content.check()?;
        Ok(content)
    }

    /// Question texts are used as map keys, so they must be non-empty and
    /// must not collide with each other or with the country key.
    pub fn check(&self) -> Result<()> {
        let q = &self.common_questions.questions;
        let mut common = BTreeSet::new();
        for text in [&q.passport, &q.travel, &q.age, &q.state, &q.dob] {
            check_key(text, "common question", &mut common)?;
        }
        for (country, questions) in &self.country_specific_questions.questions {
            let what = format!("question for {country}");
            let mut seen = common.clone();
            for text in questions {
                check_key(text, &what, &mut seen)?;
            }
        }
        for (country, questions) in &self.verification_page.questions {
            let what = format!("verification question for {country}");
            let mut seen = BTreeSet::new();
            for text in questions {
                check_key(text, &what, &mut seen)?;
            }
        }
        Ok(())
    }

    /// Common questions asked regardless of destination, in display order.
    ///
    /// The date-of-birth question is not part of this list; it is appended
    /// conditionally when the state is California.
    pub fn common_question_list(&self) -> [&str; 4] {
        let q = &self.common_questions.questions;
        [
            q.passport.as_str(),
            q.travel.as_str(),
            q.age.as_str(),
            q.state.as_str(),
        ]
    }

    pub fn is_common_question(&self, key: &str) -> bool {
        self.common_question_list().contains(&key)
    }

    pub fn age_question(&self) -> &str {
        &self.common_questions.questions.age
    }

    pub fn state_question(&self) -> &str {
        &self.common_questions.questions.state
    }

    pub fn dob_question(&self) -> &str {
        &self.common_questions.questions.dob
    }

    /// Country-specific questions; empty for unknown countries.
    pub fn country_questions(&self, country: &str) -> &[String] {
        self.country_specific_questions
            .questions
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Verification quiz questions; empty for unknown countries.
    pub fn verification_questions(&self, country: &str) -> &[String] {
        self.verification_page
            .questions
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn required_message(&self, question: &str) -> String {
        format!("{}{}", self.error_messages.required, question)
    }

    /// The hardcoded content shipped with the application.
    pub fn builtin() -> Self {
        Self {
            app_title: "Travel Visa Application".to_string(),
            header_title: "International Travel Application".to_string(),
            footer_text: "© 2024 Travel Visa Application. All rights reserved.".to_string(),

            home_title: "Welcome to Travel Visa Application".to_string(),
            country_select_label: "Select your destination country".to_string(),
            country_placeholder: "Choose a country".to_string(),
            countries: strings(&["USA", "UK", "Canada", "Australia"]),

            questions_title: "Travel Questions".to_string(),
            common_questions: CommonQuestions {
                title: "Common Questions".to_string(),
                questions: CommonQuestionTexts {
                    passport: "Do you have a valid passport?".to_string(),
                    travel: "Have you traveled internationally before?".to_string(),
                    age: "Are you over 18 years old?".to_string(),
                    state: "Select your state of residence:".to_string(),
                    dob: "Enter your date of birth:".to_string(),
                },
            },
            country_specific_questions: CountrySpecificQuestions {
                title: "Country Specific Questions".to_string(),
                questions: per_country(&[
                    (
                        "USA",
                        &[
                            "Do you need a visa for entry?",
                            "Have you completed ESTA registration?",
                        ],
                    ),
                    (
                        "UK",
                        &[
                            "Do you have proof of accommodation?",
                            "Have you booked a return ticket?",
                        ],
                    ),
                    (
                        "Canada",
                        &["Have you obtained an eTA?", "Do you have travel insurance?"],
                    ),
                    (
                        "Australia",
                        &[
                            "Have you applied for an ETA?",
                            "Have you declared any goods for customs?",
                        ],
                    ),
                ]),
            },
            states: strings(&[CALIFORNIA, "New York", "Texas", "Florida"]),
            button_labels: ButtonLabels {
                yes: "Yes".to_string(),
                no: "No".to_string(),
                next: "Next".to_string(),
                submit: "Submit Application".to_string(),
                back: "Back".to_string(),
            },
            error_messages: ErrorMessages {
                required: "Please answer: ".to_string(),
                age: "You must be at least 18 years old to proceed.".to_string(),
                state: "Please select your state of residence.".to_string(),
                dob: "Please enter your complete date of birth.".to_string(),
                country: "Please select a country to proceed.".to_string(),
            },
            date_labels: DateLabels {
                month: "Month".to_string(),
                day: "Day".to_string(),
                year: "Year".to_string(),
                placeholder: DatePlaceholders {
                    month: "Select month".to_string(),
                    day: "Select day".to_string(),
                    year: "Select year".to_string(),
                },
            },

            terms_title: "Terms and Conditions".to_string(),
            terms_text: strings(&[
                "I confirm that all information provided in this application is accurate and complete.",
                "I understand that any false statements may result in the rejection of my application.",
                "I agree to comply with all applicable laws and regulations of the destination country.",
                "I acknowledge that I am responsible for obtaining all necessary travel documents.",
                "I confirm that I have read and understood the privacy policy and terms of service.",
            ]),
            agree_text: "I agree to all terms and conditions".to_string(),
            success_message: "Application submitted successfully!".to_string(),

            verification_page: VerificationPage {
                title: "Welcome!".to_string(),
                message: "Please answer these verification questions before proceeding."
                    .to_string(),
                questions: per_country(&[
                    (
                        "USA",
                        &[
                            "Is the Grand Canyon located in Arizona?",
                            "Is Washington D.C. the capital of the United States?",
                        ],
                    ),
                    (
                        "UK",
                        &[
                            "Is Big Ben located in London?",
                            "Is the River Thames the longest river in the UK?",
                        ],
                    ),
                    (
                        "Canada",
                        &[
                            "Is Toronto the capital of Canada?",
                            "Is maple syrup a traditional Canadian product?",
                        ],
                    ),
                    (
                        "Australia",
                        &[
                            "Is the Great Barrier Reef located in Australia?",
                            "Is Canberra the capital city of Australia?",
                        ],
                    ),
                ]),
                error_messages: VerificationErrorMessages {
                    required: "Please answer all verification questions to proceed.".to_string(),
                },
            },
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Reject an empty key, the country key, or a key already in `seen`.
fn check_key<'a>(text: &'a str, what: &str, seen: &mut BTreeSet<&'a str>) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ModelError::invalid(format!("{what} is empty")));
    }
    if text == COUNTRY_ERROR_KEY {
        return Err(ModelError::invalid(format!(
            "{what} collides with the '{COUNTRY_ERROR_KEY}' key"
        )));
    }
    if !seen.insert(text) {
        return Err(ModelError::invalid(format!("duplicate {what}: {text}")));
    }
    Ok(())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn per_country(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(country, questions)| ((*country).to_string(), strings(questions)))
        .collect()
}

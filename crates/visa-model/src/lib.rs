//! Data model for the travel visa questionnaire.

pub mod answers;
pub mod calendar;
pub mod content;
pub mod error;

pub use answers::{AnswerValue, Answers, DateOfBirth, DobField, ErrorMap};
pub use calendar::DateOptions;
pub use content::{CALIFORNIA, COUNTRY_ERROR_KEY, Content};
pub use error::{ModelError, Result};

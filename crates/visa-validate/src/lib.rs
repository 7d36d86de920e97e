//! Validation rules for the travel visa questionnaire.
//!
//! Everything here is a pure function of the content snapshot and the
//! current selections; the stores in `visa-core` decide when to run them and
//! publish the results.

mod form;
mod questions;
mod verification;

pub use form::{FormInput, ValidationOutcome, check_age, validate_form};
pub use questions::{
    all_questions, country_specific_questions, question_list_for_state, requires_dob,
};
pub use verification::{TERMS_NOT_AGREED, all_verified, terms_error, verification_error};

//! View models for the routed pages.
//!
//! Each view model holds exactly the state its page renders and exposes the
//! handlers the page calls. Rendering itself happens elsewhere.

mod questions;
mod terms;
mod verification;

pub use questions::{QuestionFlowState, QuestionFlowView};
pub use terms::TermsView;
pub use verification::VerificationView;

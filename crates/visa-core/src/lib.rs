//! Stores, view models and navigation for the travel visa questionnaire.
//!
//! A session is one [`ContentStore`], one [`QuestionsStore`] and a
//! [`Navigator`] owning the active page. Stores are explicit values passed by
//! handle; nothing here is global except the log-redaction switch in
//! [`privacy`].

pub mod content_store;
pub mod error;
pub mod navigator;
pub mod observable;
pub mod privacy;
pub mod questions_store;
pub mod route;
pub mod views;

pub use content_store::ContentStore;
pub use error::{FlowError, Result};
pub use navigator::{Navigator, Page, SubmitOutcome};
pub use observable::{Observable, ReadSignal, Subscription};
pub use questions_store::QuestionsStore;
pub use route::Route;
pub use views::{QuestionFlowState, QuestionFlowView, TermsView, VerificationView};

use thiserror::Error;

use crate::route::Route;

/// Misuse of the navigator: an action was issued for a view that is not
/// currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("action requires the {expected} view but {actual} is active")]
    WrongView { expected: Route, actual: Route },
}

pub type Result<T> = std::result::Result<T, FlowError>;

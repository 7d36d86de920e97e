//! Routes between the three views.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A routed view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Country selection and the question flow.
    #[default]
    Home,
    /// Country verification quiz.
    Verification,
    /// Terms and conditions, where the application is submitted.
    Terms,
}

impl Route {
    /// Resolve a URL path. The empty path redirects to home, and so does
    /// anything unrecognised.
    pub fn from_path(path: &str) -> Self {
        match path.trim_matches('/') {
            "verification" => Self::Verification,
            "terms" => Self::Terms,
            _ => Self::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/home",
            Self::Verification => "/verification",
            Self::Terms => "/terms",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Verification => "Verification",
            Self::Terms => "Terms",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

//! Navigation between the routed views.
//!
//! The navigator owns the view model of the active route and runs the
//! transition hooks that reset store state:
//!
//! - leaving home for anywhere but verification clears everything;
//! - advancing past a passed verification quiz clears everything except the
//!   country before the terms page opens;
//! - entering verification without a selected country redirects home.

use tracing::{info, warn};

use crate::content_store::ContentStore;
use crate::error::{FlowError, Result};
use crate::questions_store::QuestionsStore;
use crate::route::Route;
use crate::views::{QuestionFlowView, TermsView, VerificationView};

/// The view model of the active route.
pub enum Page {
    Home(QuestionFlowView),
    Verification(VerificationView),
    Terms(TermsView),
}

impl Page {
    pub fn route(&self) -> Route {
        match self {
            Self::Home(_) => Route::Home,
            Self::Verification(_) => Route::Verification,
            Self::Terms(_) => Route::Terms,
        }
    }
}

/// Result of submitting the terms page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Application accepted; the navigator is back on the home page.
    Submitted { message: String },
    /// Terms not agreed; the terms page stays open with this error.
    Rejected { error: String },
}

pub struct Navigator {
    content: ContentStore,
    store: QuestionsStore,
    page: Page,
}

impl Navigator {
    /// Start a session on the home page.
    pub fn new(content: ContentStore, store: QuestionsStore) -> Self {
        let page = Page::Home(QuestionFlowView::new(store.clone()));
        Self {
            content,
            store,
            page,
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn store(&self) -> &QuestionsStore {
        &self.store
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn home(&self) -> Result<&QuestionFlowView> {
        match &self.page {
            Page::Home(view) => Ok(view),
            other => Err(wrong_view(Route::Home, other.route())),
        }
    }

    pub fn verification(&self) -> Result<&VerificationView> {
        match &self.page {
            Page::Verification(view) => Ok(view),
            other => Err(wrong_view(Route::Verification, other.route())),
        }
    }

    pub fn verification_mut(&mut self) -> Result<&mut VerificationView> {
        match &mut self.page {
            Page::Verification(view) => Ok(view),
            other => Err(wrong_view(Route::Verification, other.route())),
        }
    }

    pub fn terms(&self) -> Result<&TermsView> {
        match &self.page {
            Page::Terms(view) => Ok(view),
            other => Err(wrong_view(Route::Terms, other.route())),
        }
    }

    pub fn terms_mut(&mut self) -> Result<&mut TermsView> {
        match &mut self.page {
            Page::Terms(view) => Ok(view),
            other => Err(wrong_view(Route::Terms, other.route())),
        }
    }

    /// Navigate to `target`, running leave/enter hooks. Returns the route
    /// actually shown, which differs from `target` after a redirect.
    /// Navigating to the active route does nothing.
    pub fn navigate(&mut self, target: Route) -> Route {
        let from = self.route();
        if target == from {
            return from;
        }
        self.leave(target);
        self.page = self.enter(target);
        let landed = self.route();
        info!(from = %from, to = %landed, "navigated");
        landed
    }

    pub fn navigate_path(&mut self, path: &str) -> Route {
        self.navigate(Route::from_path(path))
    }

    /// Validate the question flow and, when it passes, move to verification
    /// keeping the selected country.
    pub fn advance_from_questions(&mut self) -> Result<bool> {
        if !self.home()?.next() {
            return Ok(false);
        }
        let country = self.store.selected_country().get();
        self.navigate(Route::Verification);
        self.store.set_selected_country(country);
        Ok(true)
    }

    /// Check the quiz and, when it passes, clear everything but the country
    /// and open the terms page.
    pub fn advance_from_verification(&mut self) -> Result<bool> {
        if !self.verification_mut()?.next() {
            return Ok(false);
        }
        self.store.reset_except_country();
        self.navigate(Route::Terms);
        Ok(true)
    }

    /// Return home from the quiz, keeping the country.
    pub fn back_from_verification(&mut self) -> Result<()> {
        let country = self.verification()?.selected_country().to_string();
        self.navigate(Route::Home);
        self.store.set_selected_country(country);
        Ok(())
    }

    pub fn submit_terms(&mut self) -> Result<SubmitOutcome> {
        let terms = self.terms_mut()?;
        if !terms.submit() {
            return Ok(SubmitOutcome::Rejected {
                error: terms.error_message().to_string(),
            });
        }
        let message = terms.success_message().to_string();
        info!("application submitted");
        self.navigate(Route::Home);
        Ok(SubmitOutcome::Submitted { message })
    }

    pub fn back_from_terms(&mut self) -> Result<()> {
        self.terms()?;
        self.navigate(Route::Verification);
        Ok(())
    }

    fn leave(&self, next: Route) {
        if matches!(self.page, Page::Home(_)) && next != Route::Verification {
            self.store.reset_all();
        }
    }

    fn enter(&self, target: Route) -> Page {
        match target {
            Route::Home => Page::Home(QuestionFlowView::new(self.store.clone())),
            Route::Verification => match VerificationView::open(self.store.clone()) {
                Some(view) => Page::Verification(view),
                None => {
                    warn!("no country selected, redirecting home");
                    Page::Home(QuestionFlowView::new(self.store.clone()))
                }
            },
            Route::Terms => Page::Terms(TermsView::new(&self.content)),
        }
    }
}

fn wrong_view(expected: Route, actual: Route) -> FlowError {
    FlowError::WrongView { expected, actual }
}

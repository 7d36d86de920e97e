//! Shared content snapshot.

use std::rc::Rc;

use tracing::debug;
use visa_model::Content;

use crate::observable::{Observable, Subscription};

/// Holds the active [`Content`] and publishes it to subscribers.
///
/// Cloning the store creates a new handle to the same snapshot.
#[derive(Debug, Clone)]
pub struct ContentStore {
    content: Observable<Rc<Content>>,
}

impl ContentStore {
    pub fn new(content: Content) -> Self {
        Self {
            content: Observable::new(Rc::new(content)),
        }
    }

    /// Store holding the built-in content.
    pub fn builtin() -> Self {
        Self::new(Content::builtin())
    }

    /// The last published snapshot. Never blocks.
    pub fn snapshot(&self) -> Rc<Content> {
        self.content.get()
    }

    /// Deliver the current snapshot now and every replacement later.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&Content) + 'static) -> Subscription {
        self.content.subscribe(move |content| listener(Rc::as_ref(content)))
    }

    /// Publish a new snapshot.
    pub fn replace(&self, content: Content) {
        debug!(countries = content.countries.len(), "content replaced");
        self.content.set(Rc::new(content));
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}

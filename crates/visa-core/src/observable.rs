#![forbid(unsafe_code)]

//! Single-threaded observable values.
//!
//! [`Observable<T>`] is a shared handle to a value plus an ordered list of
//! subscriber callbacks. Subscribing delivers the current value immediately,
//! then every later [`set`](Observable::set) or
//! [`update`](Observable::update) delivers the new value synchronously.
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order.
//! 2. Every mutation notifies, even when the new value equals the old one.
//! 3. No borrow of the value is held while a callback runs, so callbacks may
//!    read (or write) any observable, including the one notifying them.
//! 4. Dropping a [`Subscription`] removes the callback before the next
//!    notification cycle.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct ObservableInner<T> {
    value: T,
    /// Bumped once per mutation.
    version: u64,
    /// Held weakly; the strong reference lives in the [`Subscription`].
    subscribers: Vec<Weak<dyn Fn(&T)>>,
}

/// A shared, version-tracked value with change notification.
///
/// Cloning an `Observable` creates a new handle to the **same** value.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Default + Clone + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let (snapshot, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner.value);
            inner.version += 1;
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            let callbacks: Vec<Callback<T>> =
                inner.subscribers.iter().filter_map(Weak::upgrade).collect();
            (inner.value.clone(), callbacks)
        };
        for callback in callbacks {
            callback(&snapshot);
        }
    }

    /// Register `callback`, calling it once right away with the current
    /// value. The callback stays registered until the returned guard is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&callback));
        let current = self.get();
        callback(&current);
        Subscription::new(callback)
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// A read-only handle to the same value.
    pub fn read_only(&self) -> ReadSignal<T> {
        ReadSignal {
            source: self.clone(),
        }
    }
}

/// Read-only view of an [`Observable`]: values can be read and subscribed to
/// but not written.
pub struct ReadSignal<T> {
    source: Observable<T>,
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadSignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadSignal").field(&self.source).finish()
    }
}

impl<T: Clone + 'static> ReadSignal<T> {
    pub fn get(&self) -> T {
        self.source.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.source.with(f)
    }

    pub fn version(&self) -> u64 {
        self.source.version()
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.source.subscribe(callback)
    }
}

/// RAII guard for a subscriber callback.
///
/// The callback is removed when the guard is dropped or
/// [`unsubscribe`](Subscription::unsubscribe) is called.
pub struct Subscription {
    _callback: Box<dyn Any>,
}

impl Subscription {
    fn new<T: 'static>(callback: Callback<T>) -> Self {
        Self {
            _callback: Box::new(callback),
        }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subscription")
    }
}

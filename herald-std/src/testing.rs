//! Testing utilities for Herald.
//!
//! This module provides small subscribers that make dispatch easy to observe.
//!
//! # Features
//!
//! - [`Counter`]: A shared invocation counter, usable as a closure target or a
//!   bound method
//! - [`Recorder`]: A subscriber that records every event it receives
//! - [`fail_with`]: A subscriber that always fails

use herald_core::BoxError;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

// ============================================================================
// Counter
// ============================================================================

/// A shared invocation counter.
///
/// Clones share the same count.
///
/// # Example
///
/// ```rust,ignore
/// let counter = Counter::new();
/// let _handle = notifier.connect_member::<Tick, _, _>(&counter, Counter::hit);
///
/// notifier.notify(&Tick)?;
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Counter {
    count: Rc<Cell<usize>>,
}

impl Counter {
    /// Create a new counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter.
    pub fn hit(&self) {
        self.count.set(self.count.get() + 1);
    }

    /// A zero-argument subscriber incrementing this counter.
    pub fn callback(&self) -> impl Fn() + 'static {
        let counter = self.clone();
        move || counter.hit()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.set(0);
    }
}

// ============================================================================
// Recorder
// ============================================================================

/// A subscriber target that records every event it receives.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = Recorder::<u32>::new();
/// let _handle = notifier.connect::<u32, _>(recorder.callback());
///
/// notifier.notify(&7)?;
/// assert_eq!(recorder.events(), vec![7]);
/// ```
#[derive(Debug)]
pub struct Recorder<E> {
    events: Rc<RefCell<Vec<E>>>,
}

impl<E: Clone> Recorder<E> {
    /// Create a new, empty recorder.
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Record one event.
    pub fn record(&self, event: &E) {
        self.events.borrow_mut().push(event.clone());
    }

    /// A one-argument subscriber recording into this recorder.
    pub fn callback(&self) -> impl Fn(&E) + 'static
    where
        E: 'static,
    {
        let recorder = self.clone();
        move |event: &E| recorder.record(event)
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<E> {
        self.events.borrow().clone()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.borrow().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl<E: Clone> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Recorder<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

// ============================================================================
// Failing subscriber
// ============================================================================

/// A zero-argument subscriber that always fails with `message`.
pub fn fail_with(message: &'static str) -> impl Fn() -> Result<(), BoxError> + 'static {
    move || Err(message.into())
}

//! # herald - Typed Event Notifier
//!
//! `herald` is a synchronous, in-process event notifier. Any `'static` type can
//! be an event; subscribers are plain closures, functions or bound methods.
//!
//! ## Two Kinds of Subscription
//!
//! - **Type subscriptions** fire for every event of a type
//! - **Value subscriptions** fire only for events hashing like a given value
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use herald::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Key { Escape, Enter }
//! impl_event!(hashed: Key);
//!
//! let notifier = Notifier::new();
//! let _log = notifier.connect::<Key, _>(|key: &Key| println!("{key:?}"));
//! let _quit = notifier.connect_value(|| println!("quitting"), Key::Escape);
//!
//! notifier.notify(&Key::Escape)?; // both subscribers run
//! notifier.notify(&Key::Enter)?;  // only `_log` runs
//! ```
//!
//! Every `connect*` call returns a [`Handle`]; dropping it disconnects the
//! subscribers it created, [`Handle::keep`] leaves them registered for good.
//!
//! ## Features
//!
//! - `macros` - `#[derive(Event)]`
//! - `tracing` - Log connect, disconnect and dispatch through `tracing`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use herald_core::{
    // Error types
    BoxError,
    // Subscriber signatures
    Callback,
    // Events
    Event,
    EventHash,
    EventTypeId,
    HashedEvent,
    IntoOutcome,
    Method,
    NotifyError,
    impl_event,
};

// Registry
pub use herald_std::{
    EventSet, Handle, Notifier, NotifierBuilder,
    subscriber::{Bound, ErasedSubscriber, FnSubscriber, MemberSubscriber, SubscriberSource},
};

#[cfg(feature = "macros")]
pub use herald_macros::Event;

/// Ready-made logging subscriber.
pub mod logging {
    pub use herald_std::logging::log_event;
}

/// Testing utilities.
pub mod testing {
    pub use herald_std::testing::{Counter, Recorder, fail_with};
}

/// Prelude module - common imports for Herald.
///
/// # Usage
///
/// ```rust,ignore
/// use herald::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Event, EventHash, HashedEvent, Handle, Notifier, NotifyError, impl_event,
    };
}

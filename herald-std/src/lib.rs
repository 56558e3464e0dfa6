//! # herald-std
//!
//! Standard implementations for the Herald typed event notifier.
//!
//! This crate provides:
//! - **Registry**: [`Notifier`], [`NotifierBuilder`]
//! - **Subscription handles**: [`Handle`]
//! - **Subscriber wrappers**: [`FnSubscriber`], [`MemberSubscriber`]
//! - **Value subscriptions**: [`EventSet`] for tuples of events
//! - **Standard subscribers**: Logging, testing helpers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use herald_core;

// Modules
pub mod event_set;
pub mod handle;
pub mod logging;
pub mod registry;
pub mod subscriber;
pub mod testing;

pub use event_set::{EventSet, ValueBinding};
pub use handle::Handle;
pub use registry::{Notifier, NotifierBuilder};
pub use subscriber::{Bound, ErasedSubscriber, FnSubscriber, MemberSubscriber, SubscriberSource};

//! # herald-core
//!
//! Core traits for the Herald typed event notifier.
//!
//! This crate has minimal dependencies and is meant to be imported by code that
//! only defines events or subscriber signatures, without pulling in the
//! registry from `herald-std`.
//!
//! # Building Blocks
//!
//! - [`Event`] / [`HashedEvent`] - What can be broadcast, and whether it can be
//!   subscribed to by value
//! - [`EventTypeId`] / [`EventHash`] - The two dispatch keys
//! - [`Callback`] / [`Method`] - Accepted subscriber signatures
//! - [`IntoOutcome`] - Subscriber return values
//!
//! # Error Types
//!
//! - [`NotifyError`] - Why a dispatch was aborted
//! - [`BoxError`] - What fallible subscribers return

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callback;
mod error;
mod event;
mod response;

// Re-exports
pub use callback::{Callback, Method};
pub use error::{BoxError, NotifyError};
pub use event::{Event, EventHash, EventTypeId, HashedEvent};
pub use response::IntoOutcome;

//! Error types for Herald.
//!
//! - [`BoxError`] - What fallible subscribers return
//! - [`NotifyError`] - Why a dispatch was aborted

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a `notify` call.
///
/// The first failing subscriber stops the dispatch; subscribers after it, in
/// the same bucket or in the value tier, do not run.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// A subscriber returned an error.
    #[error("subscriber for `{event_type}` failed")]
    Subscriber {
        /// Type name of the event being dispatched.
        event_type: &'static str,
        /// The subscriber's error.
        #[source]
        source: BoxError,
    },

    /// An erased subscriber was handed an event of another type.
    #[error("subscriber expecting `{expected}` received a different event type")]
    TypeMismatch {
        /// Type name the subscriber was registered for.
        expected: &'static str,
    },
}

impl NotifyError {
    /// Type name of the event involved in the failure.
    pub fn event_type(&self) -> &'static str {
        match self {
            NotifyError::Subscriber { event_type, .. } => event_type,
            NotifyError::TypeMismatch { expected } => expected,
        }
    }
}

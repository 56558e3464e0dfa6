//! Logging subscriber for event observation.

use herald_core::Event;
use std::fmt::Debug;

/// A subscriber that logs every event it receives.
///
/// Connect it like any other one-argument subscriber:
///
/// ```rust,ignore
/// let _log = notifier.connect::<Key, _>(log_event::<Key>);
/// ```
///
/// Records are emitted at `info` level when the `tracing` feature is enabled.
pub fn log_event<E: Event + Debug>(event: &E) {
    #[cfg(feature = "tracing")]
    {
        tracing::info!(?event, event_type = std::any::type_name::<E>(), "event notified");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = event; // Suppress unused warning
    }
}

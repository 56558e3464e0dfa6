//! Subscriber return value conversion.

use crate::error::BoxError;

/// Trait for converting a subscriber's return value into a dispatch outcome.
///
/// # Default Implementations
///
/// - `()` → Success
/// - `Result<T, E>` → Delegates to inner `T` or propagates the error
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid subscriber return type",
    label = "missing `IntoOutcome` implementation",
    note = "Subscribers return `()` or `Result<(), E>` where `E: Into<BoxError>`."
)]
pub trait IntoOutcome {
    /// Convert the return value into success or the error that aborts dispatch.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}

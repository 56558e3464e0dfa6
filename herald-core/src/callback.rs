//! # Subscriber signatures
//!
//! A subscriber takes either no argument or exactly one `&E`, where `E` is the
//! event type it is registered against. The `Args` parameter of [`Callback`]
//! and [`Method`] encodes the arity (`()` or `(E,)`) so both forms can be
//! implemented for plain closures without overlapping.
//!
//! Anything else, such as two arguments or an argument of another event type,
//! fails the trait bound at the `connect` call site.

use crate::{error::BoxError, response::IntoOutcome};

/// A callable that can subscribe to events of type `E`.
///
/// Implemented for:
///
/// - `Fn() -> R` with `Args = ()`
/// - `Fn(&E) -> R` with `Args = (E,)`
///
/// where `R: IntoOutcome`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot subscribe to `{E}`",
    label = "expected `Fn()` or `Fn(&{E})`",
    note = "Subscribers take no argument or exactly one `&{E}` and return `()` or `Result<(), _>`."
)]
pub trait Callback<E, Args> {
    /// Run the subscriber for `event`.
    fn invoke(&self, event: &E) -> Result<(), BoxError>;
}

impl<E, F, R> Callback<E, ()> for F
where
    F: Fn() -> R,
    R: IntoOutcome,
{
    fn invoke(&self, _event: &E) -> Result<(), BoxError> {
        (self)().into_outcome()
    }
}

impl<E, F, R> Callback<E, (E,)> for F
where
    F: Fn(&E) -> R,
    R: IntoOutcome,
{
    fn invoke(&self, event: &E) -> Result<(), BoxError> {
        (self)(event).into_outcome()
    }
}

/// A method of `T` that can subscribe to events of type `E`.
///
/// Implemented for `Fn(&T) -> R` and `Fn(&T, &E) -> R`, so method paths such
/// as `Player::on_damage` can be passed directly.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a method of `{T}` that can subscribe to `{E}`",
    label = "expected `Fn(&{T})` or `Fn(&{T}, &{E})`",
    note = "Bound methods take `&self` and optionally one `&{E}`."
)]
pub trait Method<T: ?Sized, E, Args> {
    /// Run the method on `object` for `event`.
    fn invoke(&self, object: &T, event: &E) -> Result<(), BoxError>;
}

impl<T, E, F, R> Method<T, E, ()> for F
where
    T: ?Sized,
    F: Fn(&T) -> R,
    R: IntoOutcome,
{
    fn invoke(&self, object: &T, _event: &E) -> Result<(), BoxError> {
        (self)(object).into_outcome()
    }
}

impl<T, E, F, R> Method<T, E, (E,)> for F
where
    T: ?Sized,
    F: Fn(&T, &E) -> R,
    R: IntoOutcome,
{
    fn invoke(&self, object: &T, event: &E) -> Result<(), BoxError> {
        (self)(object, event).into_outcome()
    }
}

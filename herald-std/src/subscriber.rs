//! Type-erased subscriber wrappers.
//!
//! Every bucket of a [`Notifier`] stores `Box<dyn ErasedSubscriber>`, whatever
//! the signature of the wrapped callable. The wrappers here bridge typed
//! callables to that uniform interface:
//!
//! - [`FnSubscriber`] wraps a [`Callback`] (closure or free function)
//! - [`MemberSubscriber`] binds a borrowed object and one of its [`Method`]s
//!
//! The event crosses the erasure boundary as `&dyn Any` and is downcast back to
//! the exact type the wrapper was created for. The notifier only ever hands a
//! wrapper events of the type that selected its bucket.
//!
//! [`Notifier`]: crate::Notifier

use herald_core::{BoxError, Callback, Event, Method, NotifyError};
use std::{
    any::{Any, type_name},
    marker::PhantomData,
    rc::Rc,
};

/// Uniform invocation interface shared by all stored subscribers.
pub trait ErasedSubscriber {
    /// Invoke the subscriber with a type-erased event.
    fn call_erased(&self, event: &dyn Any) -> Result<(), NotifyError>;
}

fn downcast<E: Event>(event: &dyn Any) -> Result<&E, NotifyError> {
    event
        .downcast_ref::<E>()
        .ok_or(NotifyError::TypeMismatch {
            expected: type_name::<E>(),
        })
}

fn failed<E: Event>(source: BoxError) -> NotifyError {
    NotifyError::Subscriber {
        event_type: type_name::<E>(),
        source,
    }
}

/// Wrapper implementing [`ErasedSubscriber`] for a typed [`Callback`].
///
/// The callable sits behind an `Rc` so one callback can fill several slots of
/// the same handle without being `Clone`.
pub struct FnSubscriber<F, E, Args> {
    callback: Rc<F>,
    _marker: PhantomData<fn(&E, Args)>,
}

impl<F, E, Args> FnSubscriber<F, E, Args> {
    /// Create a new wrapper around a shared callback.
    pub fn new(callback: Rc<F>) -> Self {
        Self {
            callback,
            _marker: PhantomData,
        }
    }
}

impl<F, E, Args> ErasedSubscriber for FnSubscriber<F, E, Args>
where
    E: Event,
    F: Callback<E, Args>,
{
    fn call_erased(&self, event: &dyn Any) -> Result<(), NotifyError> {
        let event = downcast::<E>(event)?;
        Callback::<E, Args>::invoke(&*self.callback, event).map_err(failed::<E>)
    }
}

/// Wrapper binding a borrowed object and one of its methods.
///
/// The object is only borrowed: the notifier's lifetime parameter makes the
/// compiler reject any object that does not outlive it.
pub struct MemberSubscriber<'a, T: ?Sized, M, E, Args> {
    object: &'a T,
    method: Rc<M>,
    _marker: PhantomData<fn(&E, Args)>,
}

impl<'a, T: ?Sized, M, E, Args> MemberSubscriber<'a, T, M, E, Args> {
    /// Bind `method` to `object`.
    pub fn new(object: &'a T, method: Rc<M>) -> Self {
        Self {
            object,
            method,
            _marker: PhantomData,
        }
    }
}

impl<T, M, E, Args> ErasedSubscriber for MemberSubscriber<'_, T, M, E, Args>
where
    T: ?Sized,
    E: Event,
    M: Method<T, E, Args>,
{
    fn call_erased(&self, event: &dyn Any) -> Result<(), NotifyError> {
        let event = downcast::<E>(event)?;
        Method::<T, E, Args>::invoke(&*self.method, self.object, event).map_err(failed::<E>)
    }
}

/// Something that can mint erased subscribers for events of type `E`.
///
/// Lets one connect call produce a fresh wrapper per subscribed event, each
/// sharing the same underlying callable.
pub trait SubscriberSource<'a, E, Args> {
    /// Create a wrapper to be stored in one bucket slot.
    fn subscriber(&self) -> Box<dyn ErasedSubscriber + 'a>;
}

impl<'a, F, E, Args> SubscriberSource<'a, E, Args> for Rc<F>
where
    F: Callback<E, Args> + 'a,
    E: Event,
    Args: 'a,
{
    fn subscriber(&self) -> Box<dyn ErasedSubscriber + 'a> {
        Box::new(FnSubscriber::<F, E, Args>::new(Rc::clone(self)))
    }
}

/// An object paired with one of its methods, ready to be bound.
pub struct Bound<'a, T: ?Sized, M> {
    object: &'a T,
    method: Rc<M>,
}

impl<'a, T: ?Sized, M> Bound<'a, T, M> {
    /// Pair `object` with `method`.
    pub fn new(object: &'a T, method: M) -> Self {
        Self {
            object,
            method: Rc::new(method),
        }
    }
}

impl<'a, T, M, E, Args> SubscriberSource<'a, E, Args> for Bound<'a, T, M>
where
    T: ?Sized,
    M: Method<T, E, Args> + 'a,
    E: Event,
    Args: 'a,
{
    fn subscriber(&self) -> Box<dyn ErasedSubscriber + 'a> {
        Box::new(MemberSubscriber::<'a, T, M, E, Args>::new(
            self.object,
            Rc::clone(&self.method),
        ))
    }
}

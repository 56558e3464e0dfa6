//! Heterogeneous lists of event values for value subscriptions.
//!
//! A value subscription can name several events at once, each possibly of a
//! different type: `notifier.connect_values(cb, (Key::Escape, Scene::Menu))`.
//! Tuples of one to eight [`HashedEvent`]s implement [`EventSet`].

use crate::subscriber::{ErasedSubscriber, SubscriberSource};
use herald_core::{Event, EventHash, EventTypeId, HashedEvent};

/// One value-tier registration produced by an [`EventSet`].
pub struct ValueBinding<'a> {
    /// Type of the subscribed event.
    pub type_id: EventTypeId,
    /// Hash of the subscribed value.
    pub hash: EventHash,
    /// Wrapper to store in the matching bucket.
    pub subscriber: Box<dyn ErasedSubscriber + 'a>,
}

/// A set of event values a subscriber can be connected to in one call.
///
/// `Args` is the tuple of per-event arities, inferred from the subscriber.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a set of events this subscriber accepts",
    label = "expected a tuple of `HashedEvent` values",
    note = "Pass the events as a tuple, e.g. `(Key::A,)` or `(Key::A, Scene::Menu)`, and make sure the subscriber accepts each of them."
)]
pub trait EventSet<'a, S, Args> {
    /// Produce one binding per event, in order.
    ///
    /// Keys come from [`Event::event_hash`], the same source `notify` looks
    /// them up with. An event whose `event_hash` is `None` yields no binding.
    ///
    /// [`Event::event_hash`]: herald_core::Event::event_hash
    fn bind(self, source: &S) -> Vec<ValueBinding<'a>>;
}

macro_rules! impl_event_set {
    ($(($E:ident, $A:ident, $idx:tt)),+) => {
        impl<'a, S, $($E, $A,)+> EventSet<'a, S, ($($A,)+)> for ($($E,)+)
        where
            $(
                $E: HashedEvent,
                S: SubscriberSource<'a, $E, $A>,
            )+
        {
            fn bind(self, source: &S) -> Vec<ValueBinding<'a>> {
                let mut bindings = Vec::new();
                $(
                    if let Some(hash) = self.$idx.event_hash() {
                        bindings.push(ValueBinding {
                            type_id: EventTypeId::of::<$E>(),
                            hash,
                            subscriber: <S as SubscriberSource<'a, $E, $A>>::subscriber(source),
                        });
                    }
                )+
                bindings
            }
        }
    };
}

impl_event_set!((E1, A1, 0));
impl_event_set!((E1, A1, 0), (E2, A2, 1));
impl_event_set!((E1, A1, 0), (E2, A2, 1), (E3, A3, 2));
impl_event_set!((E1, A1, 0), (E2, A2, 1), (E3, A3, 2), (E4, A4, 3));
impl_event_set!((E1, A1, 0), (E2, A2, 1), (E3, A3, 2), (E4, A4, 3), (E5, A5, 4));
impl_event_set!(
    (E1, A1, 0),
    (E2, A2, 1),
    (E3, A3, 2),
    (E4, A4, 3),
    (E5, A5, 4),
    (E6, A6, 5)
);
impl_event_set!(
    (E1, A1, 0),
    (E2, A2, 1),
    (E3, A3, 2),
    (E4, A4, 3),
    (E5, A5, 4),
    (E6, A6, 5),
    (E7, A7, 6)
);
impl_event_set!(
    (E1, A1, 0),
    (E2, A2, 1),
    (E3, A3, 2),
    (E4, A4, 3),
    (E5, A5, 4),
    (E6, A6, 5),
    (E7, A7, 6),
    (E8, A8, 7)
);

//! # Event identity
//!
//! Every event is keyed twice:
//!
//! - by its static type, through [`EventTypeId`], which selects the bucket of
//!   type subscribers;
//! - optionally by its value, through [`EventHash`], which selects the bucket of
//!   value subscribers inside the type's table.
//!
//! Whether a type takes part in the value tier is decided by its [`Event`]
//! implementation, not at runtime. [`Event::event_hash`] is the only source of
//! the value key: registration and lookup both go through it, and types whose
//! `event_hash` returns `None` are never looked up by value.
//!
//! # Hash collisions
//!
//! Value subscriptions match on the hash, not on equality. Two distinct values
//! that hash identically fire each other's value subscribers.

use std::{
    any::{TypeId, type_name},
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
};

/// A marker trait for values that can be broadcast through a notifier.
///
/// Any `'static` type can be an event. Most types use [`impl_event!`] or
/// `#[derive(Event)]`; a hand-written impl states its hashing explicitly.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct WindowResized { width: u32, height: u32 }
///
/// impl Event for WindowResized {
///     fn event_hash(&self) -> Option<EventHash> {
///         None
///     }
/// }
///
/// #[derive(Hash)]
/// enum Door { Open, Closed }
///
/// impl Event for Door {
///     fn event_hash(&self) -> Option<EventHash> {
///         Some(self.value_hash())
///     }
/// }
///
/// impl HashedEvent for Door {}
/// ```
///
/// [`impl_event!`]: crate::impl_event
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Event`",
    label = "missing `Event` implementation",
    note = "Implement `Event` (or use `impl_event!` / `#[derive(Event)]`) to broadcast `{Self}`."
)]
pub trait Event: 'static {
    /// The value-tier key of this event.
    ///
    /// `None` keeps the type out of the value tier: it is neither registered
    /// nor looked up by value. Types that implement [`HashedEvent`] return
    /// `Some(self.value_hash())`.
    fn event_hash(&self) -> Option<EventHash>;
}

/// An event that can also be subscribed to by value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be subscribed to by value",
    label = "missing `HashedEvent` implementation",
    note = "Value subscriptions need `impl_event!(hashed: {Self})` or `#[event(hashed)]`."
)]
pub trait HashedEvent: Event + Hash {
    /// Hash of this value through its [`Hash`] implementation.
    fn value_hash(&self) -> EventHash {
        EventHash::of(self)
    }
}

/// Identity of an event's static type.
///
/// Equality and hashing use only the compiler-assigned [`TypeId`]; the type
/// name is carried for diagnostics.
#[derive(Clone, Copy)]
pub struct EventTypeId {
    id: TypeId,
    name: &'static str,
}

impl EventTypeId {
    /// The identifier of `E`.
    pub fn of<E: Event + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: type_name::<E>(),
        }
    }

    /// The fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for EventTypeId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EventTypeId {}

impl Hash for EventTypeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for EventTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventTypeId").field(&self.name).finish()
    }
}

impl fmt::Display for EventTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Hash of an event value.
///
/// Computed with a fixed-key hasher, so equal values hash equally across every
/// notifier in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventHash(u64);

impl EventHash {
    /// Hash `value` through its [`Hash`] implementation.
    pub fn of<T: Hash + ?Sized>(value: &T) -> Self {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Wrap an already computed hash.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw hash value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Implement [`Event`] for a list of types.
///
/// ```rust,ignore
/// impl_event!(Tick, Shutdown);           // type subscriptions only
/// impl_event!(hashed: Key, Scene);       // type and value subscriptions
/// ```
#[macro_export]
macro_rules! impl_event {
    (hashed: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Event for $ty {
                fn event_hash(&self) -> ::core::option::Option<$crate::EventHash> {
                    ::core::option::Option::Some($crate::HashedEvent::value_hash(self))
                }
            }

            impl $crate::HashedEvent for $ty {}
        )+
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Event for $ty {
                fn event_hash(&self) -> ::core::option::Option<$crate::EventHash> {
                    ::core::option::Option::None
                }
            }
        )+
    };
}

impl_event!(
    hashed: (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    String,
    &'static str,
);

// Floats have no `Hash`; they only reach type subscribers.
impl_event!(f32, f64);

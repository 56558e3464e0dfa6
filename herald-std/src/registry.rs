//! # Notifier
//!
//! The subscription registry. Subscribers live in one of two tables:
//!
//! - **type table**: `EventTypeId -> bucket`, fired for every event of the type
//! - **value table**: `EventTypeId -> EventHash -> bucket`, fired only for
//!   events whose value hashes to the key
//!
//! A bucket is an ordered list of slots; registration order is invocation
//! order. Every `connect*` call returns a [`Handle`] that owns the removal of
//! exactly the slots it created.
//!
//! # Dispatch and re-entrancy
//!
//! [`Notifier::notify`] snapshots the matching buckets before running anything
//! and holds no borrow of the tables while subscribers run. Subscribers may
//! therefore connect, disconnect and notify on the same notifier:
//!
//! - slots connected during a dispatch do not run in that dispatch;
//! - slots disconnected during a dispatch are skipped if they have not run yet.
//!
//! # Lifetimes
//!
//! `Notifier<'a>` may store subscribers borrowing data for `'a`, including
//! objects bound with [`Notifier::connect_member`]. The borrow checker ensures
//! those outlive the notifier and every handle created from it.

use crate::{
    event_set::{EventSet, ValueBinding},
    handle::{BucketKey, Handle, Position},
    subscriber::{Bound, ErasedSubscriber, SubscriberSource},
};
use herald_core::{Callback, Event, EventHash, EventTypeId, HashedEvent, Method, NotifyError};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    fmt,
    rc::Rc,
};

/// Registry-unique identity of a stored subscriber.
pub(crate) type SlotId = u64;

/// One stored subscriber.
pub(crate) struct Slot<'a> {
    id: SlotId,
    live: Cell<bool>,
    subscriber: Box<dyn ErasedSubscriber + 'a>,
}

type Bucket<'a> = Vec<Rc<Slot<'a>>>;

/// Both subscription tables, shared between a notifier and its handles.
#[derive(Default)]
pub(crate) struct Tables<'a> {
    by_type: HashMap<EventTypeId, Bucket<'a>>,
    by_value: HashMap<EventTypeId, HashMap<EventHash, Bucket<'a>>>,
    next_slot: SlotId,
}

impl<'a> Tables<'a> {
    fn insert(&mut self, key: BucketKey, subscriber: Box<dyn ErasedSubscriber + 'a>) -> Position {
        let id = self.next_slot;
        self.next_slot += 1;

        let slot = Rc::new(Slot {
            id,
            live: Cell::new(true),
            subscriber,
        });
        match key {
            BucketKey::Type(type_id) => self.by_type.entry(type_id).or_default().push(slot),
            BucketKey::Value(type_id, hash) => self
                .by_value
                .entry(type_id)
                .or_default()
                .entry(hash)
                .or_default()
                .push(slot),
        }

        Position { key, slot: id }
    }

    /// Remove the slots named by `positions`, returning them so the caller can
    /// drop them after releasing the tables.
    pub(crate) fn remove(&mut self, positions: &[Position]) -> Vec<Rc<Slot<'a>>> {
        let mut removed = Vec::with_capacity(positions.len());

        for position in positions {
            let slot = match position.key {
                BucketKey::Type(type_id) => take_slot(&mut self.by_type, type_id, position.slot),
                BucketKey::Value(type_id, hash) => {
                    let Some(values) = self.by_value.get_mut(&type_id) else {
                        continue;
                    };
                    let slot = take_slot(values, hash, position.slot);
                    if values.is_empty() {
                        self.by_value.remove(&type_id);
                    }
                    slot
                }
            };

            if let Some(slot) = slot {
                slot.live.set(false);
                removed.push(slot);
            }
        }

        removed
    }

    fn type_bucket(&self, type_id: EventTypeId) -> Bucket<'a> {
        self.by_type.get(&type_id).cloned().unwrap_or_default()
    }

    fn value_bucket(&self, type_id: EventTypeId, hash: EventHash) -> Bucket<'a> {
        self.by_value
            .get(&type_id)
            .and_then(|values| values.get(&hash))
            .cloned()
            .unwrap_or_default()
    }

    fn type_count(&self, type_id: EventTypeId) -> usize {
        self.by_type.get(&type_id).map_or(0, Vec::len)
    }

    fn value_count(&self, type_id: EventTypeId, hash: EventHash) -> usize {
        self.by_value
            .get(&type_id)
            .and_then(|values| values.get(&hash))
            .map_or(0, Vec::len)
    }

    fn len(&self) -> usize {
        let typed: usize = self.by_type.values().map(Vec::len).sum();
        let valued: usize = self
            .by_value
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum();
        typed + valued
    }
}

/// Remove the slot `id` from `buckets[key]`, pruning the bucket once empty.
///
/// Looks the slot up by identity: indices shift as earlier slots go away.
fn take_slot<'a, K>(
    buckets: &mut HashMap<K, Bucket<'a>>,
    key: K,
    id: SlotId,
) -> Option<Rc<Slot<'a>>>
where
    K: Eq + std::hash::Hash,
{
    let bucket = buckets.get_mut(&key)?;
    let index = bucket.iter().position(|slot| slot.id == id)?;
    let slot = bucket.remove(index);
    if bucket.is_empty() {
        buckets.remove(&key);
    }
    Some(slot)
}

fn dispatch<E: Event>(bucket: &[Rc<Slot<'_>>], event: &E) -> Result<(), NotifyError> {
    for slot in bucket {
        if slot.live.get() {
            slot.subscriber.call_erased(event)?;
        }
    }
    Ok(())
}

/// A synchronous, single-threaded typed event notifier.
///
/// # Example
///
/// ```rust,ignore
/// let notifier = Notifier::new();
///
/// let _any_key = notifier.connect::<Key, _>(|key: &Key| println!("{key:?}"));
/// let _escape = notifier.connect_value(|| println!("bye"), Key::Escape);
///
/// notifier.notify(&Key::Escape)?; // both run
/// notifier.notify(&Key::Enter)?;  // only the first runs
/// ```
pub struct Notifier<'a> {
    tables: Rc<RefCell<Tables<'a>>>,
    name: Option<&'static str>,
}

impl<'a> Notifier<'a> {
    /// Create a new, unnamed notifier.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a notifier.
    pub fn builder() -> NotifierBuilder {
        NotifierBuilder::new()
    }

    /// The name given through [`NotifierBuilder::name`].
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Subscribe `callback` to every event of type `E`.
    ///
    /// `callback` takes no argument or a single `&E`.
    pub fn connect<E, Args>(&self, callback: impl Callback<E, Args> + 'a) -> Handle<'a>
    where
        E: Event,
        Args: 'a,
    {
        let source = Rc::new(callback);
        self.attach_type(
            EventTypeId::of::<E>(),
            SubscriberSource::<'a, E, Args>::subscriber(&source),
        )
    }

    /// Subscribe `callback` to each of `events` by value.
    ///
    /// `events` is a tuple whose elements may be of different types; the
    /// callback must accept each of them. Repeated values produce independent
    /// slots, so the callback runs once per matching entry.
    pub fn connect_values<F, S, Args>(&self, callback: F, events: S) -> Handle<'a>
    where
        S: EventSet<'a, Rc<F>, Args>,
    {
        self.attach_values(events.bind(&Rc::new(callback)))
    }

    /// Subscribe `callback` to a single event value.
    pub fn connect_value<E, Args>(
        &self,
        callback: impl Callback<E, Args> + 'a,
        event: E,
    ) -> Handle<'a>
    where
        E: HashedEvent,
        Args: 'a,
    {
        self.connect_values::<_, (E,), (Args,)>(callback, (event,))
    }

    /// Subscribe `method`, bound to `object`, to every event of type `E`.
    ///
    /// `object` is borrowed, never owned.
    pub fn connect_member<E, T, Args>(
        &self,
        object: &'a T,
        method: impl Method<T, E, Args> + 'a,
    ) -> Handle<'a>
    where
        E: Event,
        T: ?Sized,
        Args: 'a,
    {
        let bound = Bound::new(object, method);
        self.attach_type(
            EventTypeId::of::<E>(),
            SubscriberSource::<'a, E, Args>::subscriber(&bound),
        )
    }

    /// Subscribe `method`, bound to `object`, to each of `events` by value.
    pub fn connect_member_values<T, M, S, Args>(
        &self,
        object: &'a T,
        method: M,
        events: S,
    ) -> Handle<'a>
    where
        T: ?Sized,
        S: EventSet<'a, Bound<'a, T, M>, Args>,
    {
        self.attach_values(events.bind(&Bound::new(object, method)))
    }

    /// Subscribe `method`, bound to `object`, to a single event value.
    pub fn connect_member_value<E, T, Args>(
        &self,
        object: &'a T,
        method: impl Method<T, E, Args> + 'a,
        event: E,
    ) -> Handle<'a>
    where
        E: HashedEvent,
        T: ?Sized,
        Args: 'a,
    {
        self.connect_member_values::<T, _, (E,), (Args,)>(object, method, (event,))
    }

    /// Broadcast `event`.
    ///
    /// Runs every type subscriber of `E`, then, if `E` takes part in the value
    /// tier, every value subscriber registered for the event's hash. Both
    /// groups run in registration order. The first subscriber error aborts the
    /// dispatch and is returned.
    pub fn notify<E: Event>(&self, event: &E) -> Result<(), NotifyError> {
        let type_id = EventTypeId::of::<E>();
        let hash = event.event_hash();

        let (typed, valued) = {
            let tables = self.tables.borrow();
            let typed = tables.type_bucket(type_id);
            let valued = hash
                .map(|hash| tables.value_bucket(type_id, hash))
                .unwrap_or_default();
            (typed, valued)
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            notifier = self.name,
            event_type = type_id.name(),
            typed = typed.len(),
            valued = valued.len(),
            "notify"
        );

        let result = dispatch(&typed, event).and_then(|()| dispatch(&valued, event));

        #[cfg(feature = "tracing")]
        if let Err(ref error) = result {
            tracing::debug!(notifier = self.name, %error, "dispatch aborted");
        }

        result
    }

    /// Number of type subscribers of `E`.
    pub fn type_subscriber_count<E: Event>(&self) -> usize {
        self.tables.borrow().type_count(EventTypeId::of::<E>())
    }

    /// Number of value subscribers matching `event`.
    pub fn value_subscriber_count<E: HashedEvent>(&self, event: &E) -> usize {
        event.event_hash().map_or(0, |hash| {
            self.tables.borrow().value_count(EventTypeId::of::<E>(), hash)
        })
    }

    /// Total number of stored subscribers across both tables.
    pub fn subscriber_count(&self) -> usize {
        self.tables.borrow().len()
    }

    /// Whether no subscriber is stored.
    pub fn is_empty(&self) -> bool {
        self.subscriber_count() == 0
    }

    fn attach_type(
        &self,
        type_id: EventTypeId,
        subscriber: Box<dyn ErasedSubscriber + 'a>,
    ) -> Handle<'a> {
        let position = self
            .tables
            .borrow_mut()
            .insert(BucketKey::Type(type_id), subscriber);
        self.handle(vec![position])
    }

    fn attach_values(&self, bindings: Vec<ValueBinding<'a>>) -> Handle<'a> {
        let positions = {
            let mut tables = self.tables.borrow_mut();
            bindings
                .into_iter()
                .map(|binding| {
                    tables.insert(
                        BucketKey::Value(binding.type_id, binding.hash),
                        binding.subscriber,
                    )
                })
                .collect()
        };
        self.handle(positions)
    }

    fn handle(&self, positions: Vec<Position>) -> Handle<'a> {
        #[cfg(feature = "tracing")]
        if let Some(position) = positions.first() {
            tracing::trace!(
                notifier = self.name,
                event_type = position.key.type_id().name(),
                slots = positions.len(),
                "connect"
            );
        }

        Handle::new(Rc::downgrade(&self.tables), positions)
    }
}

impl Default for Notifier<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Notifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("name", &self.name)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Builder for constructing a [`Notifier`].
#[derive(Debug, Clone, Default)]
pub struct NotifierBuilder {
    name: Option<&'static str>,
}

impl NotifierBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the notifier; the name shows up in `Debug` output and log records.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Build the notifier.
    pub fn build<'a>(self) -> Notifier<'a> {
        Notifier {
            tables: Rc::new(RefCell::new(Tables::default())),
            name: self.name,
        }
    }
}

//! Subscription handles.
//!
//! A [`Handle`] is the only way to remove a subscriber. It records, for every
//! slot it created, the bucket the slot lives in and the slot's identity, and
//! holds a weak reference to the notifier's tables. It never owns the
//! subscribers themselves.

use crate::registry::{SlotId, Tables};
use herald_core::{EventHash, EventTypeId};
use std::{cell::RefCell, fmt, rc::Weak};

/// Coordinates of a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BucketKey {
    /// Type table entry.
    Type(EventTypeId),
    /// Value table entry.
    Value(EventTypeId, EventHash),
}

impl BucketKey {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn type_id(&self) -> EventTypeId {
        match *self {
            BucketKey::Type(type_id) | BucketKey::Value(type_id, _) => type_id,
        }
    }
}

/// One slot owned by a handle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Position {
    pub(crate) key: BucketKey,
    pub(crate) slot: SlotId,
}

/// Removal capability for the subscribers created by one `connect*` call.
///
/// Dropping the handle disconnects them. Call [`Handle::keep`] to leave them
/// registered for the rest of the notifier's life instead.
///
/// # Example
///
/// ```rust,ignore
/// let mut handle = notifier.connect::<Tick, _>(|| redraw());
/// notifier.notify(&Tick)?;   // redraws
/// handle.disconnect();
/// notifier.notify(&Tick)?;   // does nothing
/// ```
#[must_use = "dropping a Handle disconnects its subscribers immediately"]
pub struct Handle<'a> {
    tables: Weak<RefCell<Tables<'a>>>,
    positions: Vec<Position>,
}

impl<'a> Handle<'a> {
    pub(crate) fn new(tables: Weak<RefCell<Tables<'a>>>, positions: Vec<Position>) -> Self {
        Self { tables, positions }
    }

    /// Remove every subscriber this handle owns.
    ///
    /// Calling it again, or on a kept or empty handle, does nothing. It is also
    /// a no-op once the notifier has been dropped.
    pub fn disconnect(&mut self) {
        let positions = std::mem::take(&mut self.positions);
        let tables = std::mem::take(&mut self.tables);
        if positions.is_empty() {
            return;
        }
        let Some(tables) = tables.upgrade() else {
            return;
        };

        // Subscribers are dropped only after the tables are released.
        let removed = tables.borrow_mut().remove(&positions);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            event_type = positions[0].key.type_id().name(),
            slots = removed.len(),
            "disconnect"
        );

        drop(removed);
    }

    /// Give up the removal capability, leaving the subscribers registered.
    ///
    /// Afterwards [`Handle::disconnect`] and dropping the handle do nothing.
    pub fn keep(&mut self) {
        self.positions.clear();
        self.tables = Weak::new();
    }

    /// Number of slots this handle can still remove.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether this handle owns nothing.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for Handle<'_> {
    /// An empty handle, for fields that get a subscription later.
    fn default() -> Self {
        Self {
            tables: Weak::new(),
            positions: Vec::new(),
        }
    }
}

impl Drop for Handle<'_> {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl fmt::Debug for Handle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("slots", &self.positions.len())
            .finish()
    }
}

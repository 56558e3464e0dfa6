//! Connecting subscribers by type and by value.

use herald::{Event, EventHash, HashedEvent, Notifier, impl_event, testing::Counter};
use std::{
    cell::Cell,
    hash::{Hash, Hasher},
};

mod common;
use common::{ALL_KEYS, Key, Resized, Scene, bump};

#[test]
fn test_value_subscriber_fires_only_for_its_value() {
    let (by_type, by_value) = (Cell::new(0), Cell::new(0));
    let notifier = Notifier::new();
    let _type = notifier.connect::<Key, _>(|| bump(&by_type));
    let _value = notifier.connect_value(|| bump(&by_value), Key::A);

    notifier.notify(&Key::B).unwrap();
    notifier.notify(&0i32).unwrap();
    assert_eq!(by_value.get(), 0);
    assert_eq!(by_type.get(), 1);

    notifier.notify(&Key::A).unwrap();
    assert_eq!(by_value.get(), 1);
    assert_eq!(by_type.get(), 2);
}

#[test]
fn test_type_subscriber_fires_for_every_value() {
    let counter = Cell::new(0);
    let notifier = Notifier::new();
    let _handle = notifier.connect::<Key, _>(|| bump(&counter));

    notifier.notify(&0i32).unwrap();
    assert_eq!(counter.get(), 0);

    for key in ALL_KEYS {
        notifier.notify(&key).unwrap();
    }
    assert_eq!(counter.get(), 7);
}

#[test]
fn test_only_matching_subscribers_run() {
    let counters: [Cell<i32>; 4] = Default::default();
    let notifier = Notifier::new();
    let _h1 = notifier.connect::<Key, _>(|| bump(&counters[0]));
    let _h2 = notifier.connect_value(|| bump(&counters[1]), Key::A);
    let _h3 = notifier.connect_value(|| bump(&counters[2]), Key::B);
    let _h4 = notifier.connect::<i32, _>(|value: &i32| {
        counters[3].set(counters[3].get() + value + 1)
    });

    notifier.notify(&Key::A).unwrap();

    let counts: Vec<i32> = counters.iter().map(Cell::get).collect();
    assert_eq!(counts, vec![1, 1, 0, 0]);
}

#[test]
fn test_connection_survives_notifications() {
    let (by_type, by_value) = (Cell::new(0), Cell::new(0));
    let notifier = Notifier::new();
    let _type = notifier.connect::<Key, _>(|| bump(&by_type));
    let _value = notifier.connect_value(|| bump(&by_value), Key::A);

    notifier.notify(&Key::A).unwrap();
    notifier.notify(&Key::A).unwrap();

    assert_eq!(by_type.get(), 2);
    assert_eq!(by_value.get(), 2);
}

#[test]
fn test_subscriber_receives_event() {
    let total = Cell::new(0);
    let notifier = Notifier::new();
    let _handle = notifier.connect::<i32, _>(|value: &i32| total.set(total.get() + value + 1));

    notifier.notify(&197).unwrap();
    assert_eq!(total.get(), 198);
}

#[test]
fn test_connect_multiple_values() {
    let counter = Cell::new(0);
    let notifier = Notifier::new();
    let mut handle = notifier.connect_values(|| bump(&counter), (Key::A, Key::B, Key::C));
    assert_eq!(handle.len(), 3);

    notifier.notify(&Key::A).unwrap();
    assert_eq!(counter.get(), 1);
    notifier.notify(&Key::B).unwrap();
    assert_eq!(counter.get(), 2);
    notifier.notify(&Key::C).unwrap();
    assert_eq!(counter.get(), 3);
    notifier.notify(&Key::D).unwrap();
    assert_eq!(counter.get(), 3);

    handle.disconnect();
    for key in [Key::A, Key::B, Key::C] {
        notifier.notify(&key).unwrap();
    }
    assert_eq!(counter.get(), 3);
    assert!(notifier.is_empty());
}

#[test]
fn test_connect_equal_values_fires_twice() {
    let counter = Cell::new(0);
    let notifier = Notifier::new();
    let mut handle = notifier.connect_values(|| bump(&counter), (Key::A, Key::A));

    notifier.notify(&Key::A).unwrap();
    assert_eq!(counter.get(), 2);

    notifier.notify(&Key::A).unwrap();
    assert_eq!(counter.get(), 4);

    handle.disconnect();
    notifier.notify(&Key::A).unwrap();
    assert_eq!(counter.get(), 4);
}

#[test]
fn test_connect_values_of_different_types() {
    let counter = Cell::new(0);
    let notifier = Notifier::new();
    let _handle = notifier.connect_values(|| bump(&counter), (Key::G, Scene::Level(3), 42u64));

    notifier.notify(&Scene::Level(3)).unwrap();
    notifier.notify(&Scene::Level(4)).unwrap();
    notifier.notify(&Scene::Menu).unwrap();
    notifier.notify(&42u64).unwrap();
    notifier.notify(&42u32).unwrap();
    notifier.notify(&Key::G).unwrap();

    assert_eq!(counter.get(), 3);
}

#[test]
fn test_one_argument_value_subscriber_gets_the_event() {
    let seen = Cell::new(None);
    let notifier = Notifier::new();
    let _handle =
        notifier.connect_value(|scene: &Scene| seen.set(Some(scene.clone())), Scene::Level(2));

    notifier.notify(&Scene::Level(1)).unwrap();
    assert_eq!(seen.take(), None);

    notifier.notify(&Scene::Level(2)).unwrap();
    assert_eq!(seen.take(), Some(Scene::Level(2)));
}

#[test]
fn test_type_tier_runs_before_value_tier_in_registration_order() {
    let order = std::cell::RefCell::new(Vec::new());
    let notifier = Notifier::new();
    let _v1 = notifier.connect_value(|| order.borrow_mut().push("value-1"), Key::A);
    let _t1 = notifier.connect::<Key, _>(|| order.borrow_mut().push("type-1"));
    let _v2 = notifier.connect_value(|| order.borrow_mut().push("value-2"), Key::A);
    let _t2 = notifier.connect::<Key, _>(|| order.borrow_mut().push("type-2"));

    notifier.notify(&Key::A).unwrap();

    assert_eq!(*order.borrow(), vec!["type-1", "type-2", "value-1", "value-2"]);
}

#[test]
fn test_unhashed_event_reaches_type_subscribers() {
    let area = Cell::new(0.0f32);
    let notifier = Notifier::new();
    let _handle =
        notifier.connect::<Resized, _>(|size: &Resized| area.set(size.width * size.height));

    notifier
        .notify(&Resized {
            width: 4.0,
            height: 2.5,
        })
        .unwrap();

    assert_eq!(area.get(), 10.0);
}

#[test]
fn test_notify_without_subscribers_is_a_no_op() {
    let notifier = Notifier::new();
    assert!(notifier.notify(&Key::A).is_ok());
    assert!(notifier.notify(&"nobody listens").is_ok());
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Door {
    Open,
    Closed,
}

impl Event for Door {
    fn event_hash(&self) -> Option<EventHash> {
        Some(self.value_hash())
    }
}

impl HashedEvent for Door {}

#[test]
fn test_hand_written_hashed_event_reaches_value_subscribers() {
    let hits = Counter::new();
    let notifier = Notifier::new();
    let _open = notifier.connect_value(hits.callback(), Door::Open);
    assert_eq!(notifier.value_subscriber_count(&Door::Open), 1);

    notifier.notify(&Door::Closed).unwrap();
    assert_eq!(hits.count(), 0);

    notifier.notify(&Door::Open).unwrap();
    assert_eq!(hits.count(), 1);
}

#[derive(Hash)]
struct Alarm;

impl Event for Alarm {
    fn event_hash(&self) -> Option<EventHash> {
        None
    }
}

impl HashedEvent for Alarm {}

#[test]
fn test_event_without_value_key_stores_no_value_subscriber() {
    let hits = Counter::new();
    let notifier = Notifier::new();
    let handle = notifier.connect_value(hits.callback(), Alarm);

    assert!(handle.is_empty());
    assert_eq!(notifier.value_subscriber_count(&Alarm), 0);
    assert!(notifier.is_empty());

    notifier.notify(&Alarm).unwrap();
    assert_eq!(hits.count(), 0);
}

/// Hashes only the floor, so two cabins on one floor collide.
struct Cabin {
    floor: u8,
    side: char,
}

impl Hash for Cabin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.floor.hash(state);
    }
}

impl_event!(hashed: Cabin);

#[test]
fn test_values_hashing_alike_fire_each_others_subscribers() {
    let port = Cabin { floor: 2, side: 'L' };
    let starboard = Cabin { floor: 2, side: 'R' };
    assert_ne!(port.side, starboard.side);

    let (left, right) = (Counter::new(), Counter::new());
    let notifier = Notifier::new();
    let _left = notifier.connect_value(left.callback(), port);
    let _right = notifier.connect_value(right.callback(), starboard);
    assert_eq!(notifier.value_subscriber_count(&Cabin { floor: 2, side: 'X' }), 2);

    notifier.notify(&Cabin { floor: 2, side: 'L' }).unwrap();
    assert_eq!((left.count(), right.count()), (1, 1));

    notifier.notify(&Cabin { floor: 3, side: 'R' }).unwrap();
    assert_eq!((left.count(), right.count()), (1, 1));
}

//! `#[derive(Event)]` integration.

#![cfg(feature = "macros")]

use herald::{Event, EventHash, HashedEvent, Notifier, testing::Counter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, herald::Event)]
#[event(hashed)]
enum Button {
    Left,
    Right,
}

#[derive(Debug, herald::Event)]
struct Scrolled {
    delta: f64,
}

#[derive(Debug, Hash, herald::Event)]
#[event(hashed)]
struct Tagged<T: std::hash::Hash + 'static> {
    tag: T,
}

#[test]
fn test_derive_plain_event() {
    fn assert_event<T: Event>() {}
    assert_event::<Scrolled>();

    assert_eq!(Scrolled { delta: 1.0 }.event_hash(), None);
}

#[test]
fn test_derive_hashed_event() {
    assert_eq!(Button::Left.event_hash(), Some(EventHash::of(&Button::Left)));
    assert_eq!(Button::Left.value_hash(), EventHash::of(&Button::Left));
    assert_eq!(Tagged { tag: 3u8 }.event_hash(), Some(EventHash::of(&Tagged { tag: 3u8 })));
}

#[test]
fn test_derived_events_dispatch() {
    let (left, any_button, scrolls) = (Counter::new(), Counter::new(), Counter::new());
    let notifier = Notifier::new();
    let _left = notifier.connect_value(left.callback(), Button::Left);
    let _any = notifier.connect::<Button, _>(any_button.callback());
    let _scroll = notifier.connect::<Scrolled, _>(scrolls.callback());

    notifier.notify(&Button::Left).unwrap();
    notifier.notify(&Button::Right).unwrap();
    notifier.notify(&Scrolled { delta: -2.0 }).unwrap();

    assert_eq!(left.count(), 1);
    assert_eq!(any_button.count(), 2);
    assert_eq!(scrolls.count(), 1);
}

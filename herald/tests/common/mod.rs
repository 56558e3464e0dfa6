#![allow(dead_code)]

use herald::{BoxError, impl_event};
use std::cell::Cell;

// ============================================================================
// Test Event Types
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl_event!(hashed: Key);

pub const ALL_KEYS: [Key; 7] = [Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scene {
    Menu,
    Level(u32),
}

impl_event!(hashed: Scene);

/// An event that only supports type subscriptions.
#[derive(Clone, Debug, PartialEq)]
pub struct Resized {
    pub width: f32,
    pub height: f32,
}

impl_event!(Resized);

// ============================================================================
// Test Subscribers
// ============================================================================

/// Bump a `Cell<i32>` counter.
pub fn bump(counter: &Cell<i32>) {
    counter.set(counter.get() + 1);
}

#[derive(Default)]
pub struct Listener {
    pub total: Cell<i32>,
    pub pings: Cell<i32>,
}

impl Listener {
    pub fn on_value(&self, value: &i32) {
        self.total.set(self.total.get() + value + 1);
    }

    pub fn on_ping(&self) {
        self.pings.set(self.pings.get() + 1);
    }

    pub fn on_scene(&self, scene: &Scene) -> Result<(), BoxError> {
        match scene {
            Scene::Level(0) => Err("level zero does not exist".into()),
            _ => {
                self.on_ping();
                Ok(())
            }
        }
    }
}

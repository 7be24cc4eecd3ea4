//! Single-slot observable cell.
//!
//! A [`Writable`] holds at most one value. Writing replaces the occupant and
//! synchronously notifies every subscriber; subscribing replays the current
//! value (including the unset state) before any later change.
//!
//! The cell is built on `Rc`/`RefCell` and is meant to live on the UI thread.
//! Clones share the same slot.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Subscriber<T> = Rc<dyn Fn(Option<&T>)>;

struct Slot<T> {
    label: &'static str,
    value: RefCell<Option<T>>,
    subscribers: RefCell<Vec<(u64, Subscriber<T>)>>,
    next_id: Cell<u64>,
}

/// Shared, observable slot holding zero or one value.
pub struct Writable<T> {
    slot: Rc<Slot<T>>,
}

impl<T: Clone + 'static> Writable<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::named("writable")
    }

    /// Create an empty slot with a label used in log messages.
    pub fn named(label: &'static str) -> Self {
        Self {
            slot: Rc::new(Slot {
                label,
                value: RefCell::new(None),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Current occupant, if any.
    pub fn get(&self) -> Option<T> {
        self.slot.value.borrow().clone()
    }

    pub fn is_set(&self) -> bool {
        self.slot.value.borrow().is_some()
    }

    /// Replace the occupant and notify subscribers.
    pub fn set(&self, value: T) {
        let previous = self.slot.value.replace(Some(value));
        if previous.is_some() {
            log::debug!("store '{}': replacing existing value", self.slot.label);
        }
        drop(previous);
        self.notify();
    }

    /// Set a new value computed from the current one.
    pub fn update(&self, f: impl FnOnce(Option<T>) -> T) {
        let next = f(self.get());
        self.set(next);
    }

    /// Empty the slot and notify subscribers.
    pub fn clear(&self) {
        let previous = self.slot.value.replace(None);
        drop(previous);
        self.notify();
    }

    /// Register `callback`. It is called right away with the current value
    /// and then after every change, until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe(&self, callback: impl Fn(Option<&T>) + 'static) -> Subscription<T> {
        let id = self.slot.next_id.get();
        self.slot.next_id.set(id + 1);

        let callback: Subscriber<T> = Rc::new(callback);
        self.slot.subscribers.borrow_mut().push((id, Rc::clone(&callback)));

        let current = self.get();
        callback(current.as_ref());

        Subscription {
            slot: Rc::downgrade(&self.slot),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slot.subscribers.borrow().len()
    }

    // Works on snapshots so subscribers may read, write or unsubscribe
    // while being notified. A subscriber removed by an earlier callback is
    // skipped.
    fn notify(&self) {
        let current = self.get();
        let subscribers: Vec<(u64, Subscriber<T>)> = self
            .slot
            .subscribers
            .borrow()
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in subscribers {
            if self.is_subscribed(id) {
                callback(current.as_ref());
            }
        }
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.slot.subscribers.borrow().iter().any(|(other, _)| *other == id)
    }
}

impl<T: Clone + 'static> Default for Writable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writable")
            .field("label", &self.slot.label)
            .field("is_set", &self.slot.value.borrow().is_some())
            .field("subscribers", &self.slot.subscribers.borrow().len())
            .finish()
    }
}

/// Handle returned by [`Writable::subscribe`]. Delivery stops when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription<T> {
    slot: Weak<Slot<T>>,
    id: u64,
}

impl<T> Subscription<T> {
    pub fn unsubscribe(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.upgrade() {
            slot.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

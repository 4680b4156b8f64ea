//! Move observers: an ordered list of callbacks fired on every committed position.

use std::fmt;

/// What observers see when the carousel position is committed or re-announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// The current item index.
    pub index: usize,
    /// Total number of items.
    pub item_count: usize,
    /// Effective number of visible items (1 on mobile).
    pub slides_visible: usize,
}

impl Move {
    /// True when an item exists at `index + slides_visible`, i.e. there is
    /// still a window to scroll to on the right.
    pub fn has_next_window(&self) -> bool {
        self.index + self.slides_visible < self.item_count
    }
}

pub type MoveCallback = Box<dyn FnMut(&Move)>;

/// Returned by [`EventHub::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

#[derive(Default)]
pub struct EventHub {
    next_id: u64,
    observers: Vec<(ObserverHandle, MoveCallback)>,
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl EventHub {
    pub fn subscribe(&mut self, callback: MoveCallback) -> ObserverHandle {
        let handle = ObserverHandle(self.next_id);
        self.next_id += 1;
        self.observers.push((handle, callback));
        handle
    }

    /// Returns false if the handle was already removed.
    pub fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(h, _)| *h != handle);
        self.observers.len() != before
    }

    /// Call every observer, in registration order.
    pub fn notify(&mut self, event: &Move) {
        for (_, callback) in self.observers.iter_mut() {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

//! Observer registry
//!
//! Views register a callback and are told, synchronously and in
//! registration order, whenever the budget changes. Each callback receives
//! the freshly computed `Totals` snapshot; nothing else about the state is
//! exposed to it.

use std::fmt;

use crate::models::Totals;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

type Observer = Box<dyn FnMut(&Totals)>;

/// Ordered list of change subscribers
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
    notifications: u64,
}

impl ObserverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; it runs after every accepted mutation
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Totals) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Deliver a snapshot to every subscriber in registration order
    pub fn notify(&mut self, totals: &Totals) {
        self.notifications += 1;
        for (_, observer) in self.observers.iter_mut() {
            observer(totals);
        }
    }

    /// Number of notification rounds delivered so far
    pub fn notification_count(&self) -> u64 {
        self.notifications
    }

    /// Number of registered subscribers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether nobody is subscribed
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscribers", &self.observers.len())
            .field("notifications", &self.notifications)
            .finish()
    }
}

//! Subscriber registry and change notification dispatch

use crate::contract::SubscribeCallback;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Ordered change callbacks per setting name
#[derive(Default)]
pub struct SubscriberRegistry {
    subscribers: RwLock<HashMap<String, Vec<SubscribeCallback>>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback for `name`
    pub fn register(&self, name: &str, callback: SubscribeCallback) {
        self.subscribers
            .write()
            .entry(name.to_string())
            .or_default()
            .push(callback);
    }

    pub fn count(&self, name: &str) -> usize {
        self.subscribers.read().get(name).map_or(0, Vec::len)
    }

    /// Fire every callback for `name` as its own blocking task
    ///
    /// Returns how many callbacks were scheduled. Callback panics stay inside
    /// their task and never reach the caller. Must be called from within a
    /// tokio runtime.
    pub fn publish(&self, name: &str, value: &str) -> usize {
        // Clone the list so the lock is released before anything runs.
        let callbacks = match self.subscribers.read().get(name) {
            Some(callbacks) => callbacks.clone(),
            None => return 0,
        };

        for callback in &callbacks {
            let callback = callback.clone();
            let value = value.to_string();
            tokio::task::spawn_blocking(move || callback(value));
        }

        tracing::debug!(setting = name, subscribers = callbacks.len(), "Dispatched setting change");
        callbacks.len()
    }
}

impl std::fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let subscribers = self.subscribers.read();
        let counts: HashMap<&str, usize> = subscribers
            .iter()
            .map(|(name, callbacks)| (name.as_str(), callbacks.len()))
            .collect();
        f.debug_struct("SubscriberRegistry")
            .field("subscribers", &counts)
            .finish()
    }
}

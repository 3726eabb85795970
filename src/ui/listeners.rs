//! Scoped input listeners.
//!
//! Components subscribe a handler that turns raw input into a message and keep
//! the returned [`Subscription`] for as long as they are mounted. Dropping the
//! subscription detaches the handler, so input never reaches a component that
//! is gone.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

type Handler<E, M> = Box<dyn Fn(&E) -> Option<M> + Send>;

struct Registry<E, M> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E, M>)>,
}

/// Listener registry for one kind of input event `E` producing messages `M`.
pub struct Listeners<E, M> {
    registry: Arc<Mutex<Registry<E, M>>>,
}

impl<E, M> Clone for Listeners<E, M> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<E, M> Default for Listeners<E, M> {
    fn default() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }
}

impl<E: 'static, M: 'static> Listeners<E, M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler`; it stays active until the subscription is dropped.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&E) -> Option<M> + Send + 'static,
    {
        let id = {
            let mut registry = self.registry.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.push((id, Box::new(handler)));
            id
        };

        let weak: Weak<Mutex<Registry<E, M>>> = Arc::downgrade(&self.registry);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.lock().handlers.retain(|(entry, _)| *entry != id);
                }
            })),
        }
    }

    /// Offer `event` to handlers, newest first. The first message wins.
    pub fn dispatch(&self, event: &E) -> Option<M> {
        let registry = self.registry.lock();
        registry
            .handlers
            .iter()
            .rev()
            .find_map(|(_, handler)| handler(event))
    }

    pub fn len(&self) -> usize {
        self.registry.lock().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unsubscribe capability returned by [`Listeners::subscribe`].
#[must_use = "dropping the subscription detaches the listener"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_reaches_subscriber() {
        let listeners: Listeners<u8, &'static str> = Listeners::new();
        let _sub = listeners.subscribe(|n| (*n == 1).then_some("one"));
        assert_eq!(listeners.dispatch(&1), Some("one"));
        assert_eq!(listeners.dispatch(&2), None);
    }

    #[test]
    fn newest_subscriber_sees_event_first() {
        let listeners: Listeners<u8, &'static str> = Listeners::new();
        let _page = listeners.subscribe(|_| Some("page"));
        let _modal = listeners.subscribe(|_| Some("modal"));
        assert_eq!(listeners.dispatch(&0), Some("modal"));
    }

    #[test]
    fn falls_through_when_newest_declines() {
        let listeners: Listeners<u8, &'static str> = Listeners::new();
        let _page = listeners.subscribe(|_| Some("page"));
        let _modal = listeners.subscribe(|n| (*n == 9).then_some("modal"));
        assert_eq!(listeners.dispatch(&1), Some("page"));
    }

    #[test]
    fn drop_detaches_handler() {
        let listeners: Listeners<u8, &'static str> = Listeners::new();
        let sub = listeners.subscribe(|_| Some("x"));
        assert_eq!(listeners.len(), 1);
        drop(sub);
        assert!(listeners.is_empty());
        assert_eq!(listeners.dispatch(&0), None);
    }

    #[test]
    fn explicit_unsubscribe_detaches_handler() {
        let listeners: Listeners<u8, &'static str> = Listeners::new();
        let keep = listeners.subscribe(|_| Some("keep"));
        listeners.subscribe(|_| Some("gone")).unsubscribe();
        assert_eq!(listeners.dispatch(&0), Some("keep"));
        drop(keep);
    }

    #[test]
    fn subscription_outliving_registry_is_harmless() {
        let listeners: Listeners<u8, ()> = Listeners::new();
        let sub = listeners.subscribe(|_| Some(()));
        drop(listeners);
        drop(sub);
    }
}

//! Synchronous publish/subscribe.
//!
//! Subscribers are keyed by event name and identified by their handler
//! pointer: subscribing the same `Arc` twice to one event keeps a single
//! entry. Publishing snapshots the subscriber list and releases the lock
//! before calling anyone, so a handler may subscribe, unsubscribe or publish
//! again while it runs. Re-entrant publishing is not guarded against; a
//! handler that re-publishes its own event recurses.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use serde_json::Value;
use tracing::{debug, error};

/// Subscriber callback. Returning `Err` does not stop delivery to the others.
pub type Handler = Arc<dyn Fn(&Value) -> anyhow::Result<()> + Send + Sync>;

/// Wrap a closure into a [`Handler`].
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&Value) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

struct Entry {
    id: u64,
    handler: Handler,
}

#[derive(Default)]
struct BusState {
    events: HashMap<String, Vec<Entry>>,
    next_id: u64,
}

impl BusState {
    fn remove_where(&mut self, event: &str, pred: impl Fn(&Entry) -> bool) -> bool {
        let Some(entries) = self.events.get_mut(event) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|entry| !pred(entry));
        let removed = entries.len() != before;
        if entries.is_empty() {
            self.events.remove(event);
        }
        removed
    }
}

fn lock(state: &Mutex<BusState>) -> MutexGuard<'_, BusState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Event bus handle. Clones share the same subscriber table.
#[derive(Clone, Default)]
pub struct EventBus {
    state: Arc<Mutex<BusState>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = lock(&self.state);
        let mut events: Vec<_> = state.events.keys().collect();
        events.sort();
        f.debug_struct("EventBus").field("events", &events).finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to `event`. Subscribing a handler that is already
    /// present returns a handle to the existing entry.
    pub fn subscribe(&self, event: &str, handler: Handler) -> Subscription {
        let mut state = lock(&self.state);

        let existing = state.events.get(event).and_then(|entries| {
            entries
                .iter()
                .find(|entry| Arc::ptr_eq(&entry.handler, &handler))
                .map(|entry| entry.id)
        });

        let id = match existing {
            Some(id) => id,
            None => {
                state.next_id += 1;
                let id = state.next_id;
                state
                    .events
                    .entry(event.to_string())
                    .or_default()
                    .push(Entry { id, handler });
                id
            }
        };

        Subscription {
            bus: Arc::downgrade(&self.state),
            event: event.to_string(),
            id,
        }
    }

    /// Remove `handler` from `event`. Returns whether it was subscribed.
    pub fn unsubscribe(&self, event: &str, handler: &Handler) -> bool {
        lock(&self.state).remove_where(event, |entry| Arc::ptr_eq(&entry.handler, handler))
    }

    /// Deliver `data` to every current subscriber of `event`, in subscription
    /// order. Failures are logged and skipped. Returns the number of
    /// subscribers the event was delivered to (failed ones included).
    pub fn publish(&self, event: &str, data: &Value) -> usize {
        let snapshot: Vec<Handler> = lock(&self.state)
            .events
            .get(event)
            .map(|entries| entries.iter().map(|entry| entry.handler.clone()).collect())
            .unwrap_or_default();

        if snapshot.is_empty() {
            debug!(event, "published with no subscribers");
            return 0;
        }

        for handler in &snapshot {
            if let Err(e) = handler(data) {
                error!(event, "event handler failed: {e:#}");
            }
        }
        snapshot.len()
    }

    /// Subscribe for a single delivery. The handler is removed before it runs.
    pub fn once(&self, event: &str, handler: Handler) -> Subscription {
        let fired = AtomicBool::new(false);
        let slot = Arc::new(AtomicU64::new(0));
        let bus = Arc::downgrade(&self.state);
        let name = event.to_string();

        let own_id = slot.clone();
        let wrapper: Handler = Arc::new(move |data| {
            if fired.swap(true, Ordering::SeqCst) {
                return Ok(());
            }
            if let Some(state) = bus.upgrade() {
                let id = own_id.load(Ordering::SeqCst);
                lock(&state).remove_where(&name, |entry| entry.id == id);
            }
            handler(data)
        });

        let subscription = self.subscribe(event, wrapper);
        slot.store(subscription.id, Ordering::SeqCst);
        subscription
    }

    pub fn has_listeners(&self, event: &str) -> bool {
        lock(&self.state)
            .events
            .get(event)
            .is_some_and(|entries| !entries.is_empty())
    }

    pub fn listener_count(&self, event: &str) -> usize {
        lock(&self.state).events.get(event).map_or(0, Vec::len)
    }

    /// Drop every subscription.
    pub fn clear(&self) {
        lock(&self.state).events.clear();
    }
}

/// Handle to one subscription entry.
#[derive(Debug, Clone)]
pub struct Subscription {
    bus: Weak<Mutex<BusState>>,
    event: String,
    id: u64,
}

impl Subscription {
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Remove exactly this entry. Returns whether it was still subscribed.
    pub fn unsubscribe(&self) -> bool {
        match self.bus.upgrade() {
            Some(state) => lock(&state).remove_where(&self.event, |entry| entry.id == self.id),
            None => false,
        }
    }
}

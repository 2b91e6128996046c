use std::collections::{HashMap, VecDeque};

use tracing::debug;

use super::events::{EventKind, SceneEvent};
use super::state::SceneState;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&SceneEvent, &mut SceneState)>;

/// Publish/subscribe dispatcher owned by the application.
///
/// Handlers receive the event and the scene state explicitly, so none of
/// them keeps references to curves or meshes between events. Handlers for
/// one event kind run in subscription order; queued events are delivered
/// strictly in the order they were enqueued.
#[derive(Default)]
pub struct EventBus {
    subscriptions: HashMap<EventKind, Vec<(SubscriptionId, Handler)>>,
    queue: VecDeque<SceneEvent>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for every event of `kind`.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&SceneEvent, &mut SceneState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions
            .entry(kind)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Remove a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for handlers in self.subscriptions.values_mut() {
            if let Some(pos) = handlers.iter().position(|(h, _)| *h == id) {
                handlers.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscriptions.get(&kind).map_or(0, Vec::len)
    }

    /// Deliver `event` to its subscribers right away. Returns the number of
    /// handlers that ran.
    pub fn publish(&mut self, event: SceneEvent, scene: &mut SceneState) -> usize {
        let kind = event.kind();
        let Some(handlers) = self.subscriptions.get_mut(&kind) else {
            debug!(event = %kind, "No subscribers");
            return 0;
        };
        for (_, handler) in handlers.iter_mut() {
            handler(&event, scene);
        }
        handlers.len()
    }

    /// Queue an event for the next [`EventBus::dispatch_pending`].
    pub fn enqueue(&mut self, event: SceneEvent) {
        self.queue.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drain the queue in order, fully handling each event before the next.
    /// Returns the number of events delivered.
    pub fn dispatch_pending(&mut self, scene: &mut SceneState) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.queue.pop_front() {
            self.publish(event, scene);
            delivered += 1;
        }
        delivered
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<EventKind, usize> = self
            .subscriptions
            .iter()
            .map(|(k, v)| (*k, v.len()))
            .collect();
        f.debug_struct("EventBus")
            .field("subscriptions", &counts)
            .field("pending", &self.queue.len())
            .finish()
    }
}

//! Chat store
//!
//! Single-writer container threading chat state through the reducer. After
//! every dispatch it notifies subscribers and lets the read tracker queue read
//! requests; outgoing requests wait in an outbox until the transport drains
//! them with [`ChatStore::take_requests`].

use crate::Result;
use crate::chat::{ChatState, Event, ReadTracker, reduce};
use crate::protocol::{self, ClientRequest};
use crate::settings::Settings;

type Subscriber = Box<dyn FnMut(&ChatState) + Send>;

/// Store holding the current chat state
pub struct ChatStore {
    /// Current state snapshot
    state: ChatState,
    /// Client settings
    settings: Settings,
    /// Read tracker, absent when signed out or disabled
    tracker: Option<ReadTracker>,
    /// Callbacks run after each dispatch
    subscribers: Vec<Subscriber>,
    /// Requests waiting for the transport
    outbox: Vec<ClientRequest>,
}

impl std::fmt::Debug for ChatStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatStore")
            .field("state", &self.state)
            .field("settings", &self.settings)
            .field("tracker", &self.tracker)
            .field("subscribers", &self.subscribers.len())
            .field("outbox", &self.outbox)
            .finish()
    }
}

impl ChatStore {
    /// Create a store with empty state
    pub fn new(settings: Settings) -> Self {
        Self::with_state(settings, ChatState::new())
    }

    /// Create a store starting from `state`
    pub fn with_state(settings: Settings, state: ChatState) -> Self {
        let tracker = (settings.mark_read_on_view && settings.is_signed_in())
            .then(|| ReadTracker::new(settings.viewer.as_str()));

        Self {
            state,
            settings,
            tracker,
            subscribers: Vec::new(),
            outbox: Vec::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Clone of the current state, unaffected by later dispatches
    pub fn snapshot(&self) -> ChatState {
        self.state.clone()
    }

    /// Client settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Register a callback run with the new state after every dispatch
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&ChatState) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply an event and return the new state
    pub fn dispatch(&mut self, event: Event) -> &ChatState {
        let kind = event.kind();
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &event);

        tracing::debug!(
            "Dispatched {} ({} messages, scroll target {:?})",
            kind,
            self.state.len(),
            self.state.scroll_target
        );

        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }

        if let Some(tracker) = self.tracker.as_mut() {
            self.outbox.extend(tracker.observe(&self.state));
        }

        &self.state
    }

    /// Decode a `{type, payload}` action and dispatch it
    ///
    /// Malformed actions leave the state untouched and return the error.
    pub fn dispatch_json(&mut self, data: &str) -> Result<&ChatState> {
        match protocol::decode_action(data) {
            Ok(event) => Ok(self.dispatch(event)),
            Err(e) => {
                tracing::warn!("Dropping malformed action: {}", e);
                Err(e)
            }
        }
    }

    /// Queue a message from the viewer
    pub fn send_text(&mut self, text: &str) -> Result<()> {
        let request =
            protocol::send_text(&self.settings.viewer, text, self.settings.max_message_length)?;
        tracing::info!("Queued message from {}", self.settings.viewer);
        self.outbox.push(request);
        Ok(())
    }

    /// Drain queued outgoing requests in order
    pub fn take_requests(&mut self) -> Vec<ClientRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Return the scroll target and clear it
    pub fn take_scroll_target(&mut self) -> Option<String> {
        self.state.scroll_target.take()
    }
}

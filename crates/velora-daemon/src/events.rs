//! Event emission system.
//!
//! Events are pushed from the daemon to UI subscribers via JSON-RPC
//! notifications. Each subscriber has an independent buffer with
//! backpressure at 1000 events.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// An event emitted by the daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Event type name (e.g. "RatesUpdated", "DaemonStarted").
    pub event_type: String,
    /// Unix timestamp.
    pub timestamp: u64,
    /// Type-specific payload.
    pub payload: serde_json::Value,
}

/// Filter for event subscriptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFilter {
    /// Category filter: "rates", "economy", "profile", "system".
    pub categories: Option<Vec<String>>,
    /// Filter to specific profile ids (hex).
    pub profile_ids: Option<Vec<String>>,
}

/// Event bus for broadcasting events to subscribers.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
    sequence: Arc<AtomicU64>,
}

impl EventBus {
    /// Create a new event bus with the given buffer capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Emit an event to all subscribers.
    pub fn emit(&self, event: Event) {
        self.sequence.fetch_add(1, Ordering::SeqCst);
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(event);
    }

    /// Subscribe to events. Returns a receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Get the current sequence number.
    pub fn sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }
}

impl EventFilter {
    /// Check if an event matches this filter.
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(ref categories) = self.categories {
            let event_category = categorize_event(&event.event_type);
            if !categories.contains(&event_category) {
                return false;
            }
        }

        if let Some(ref profile_ids) = self.profile_ids {
            if let Some(pid) = event.payload.get("profile_id").and_then(|v| v.as_str()) {
                if !profile_ids.iter().any(|id| id == pid) {
                    return false;
                }
            }
        }

        true
    }
}

/// Categorize an event type into a category.
fn categorize_event(event_type: &str) -> String {
    match event_type {
        s if s.starts_with("Rates") => "rates".to_string(),
        s if s.starts_with("Earnings") || s.starts_with("Payout") => "economy".to_string(),
        s if s.starts_with("Profile") || s.starts_with("Availability") => "profile".to_string(),
        _ => "system".to_string(),
    }
}

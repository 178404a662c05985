//! Subscription types for live state updates.

use crate::types::{AppStateRecord, Sequence, StateField};
use serde::{Deserialize, Serialize};

/// Configuration for a subscription.
#[derive(Clone, Debug)]
pub struct SubscriptionConfig {
    /// Max buffered events before dropping subscriber.
    /// Default: 256
    pub buffer_size: usize,

    /// Filter criteria.
    pub filter: SubscriptionFilter,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            buffer_size: 256,
            filter: SubscriptionFilter::default(),
        }
    }
}

/// Filter criteria for subscriptions.
#[derive(Clone, Debug, Default)]
pub struct SubscriptionFilter {
    /// Only changes touching one of these fields (None = every change).
    pub fields: Option<Vec<StateField>>,
}

impl SubscriptionFilter {
    /// Subscribe to every state change.
    pub fn all() -> Self {
        Self::default()
    }

    /// Subscribe to changes of specific fields.
    pub fn fields(fields: Vec<StateField>) -> Self {
        Self {
            fields: Some(fields),
        }
    }

    /// Whether a change touching `changed` passes this filter.
    pub fn matches(&self, changed: &[StateField]) -> bool {
        match self.fields {
            Some(ref wanted) => changed.iter().any(|f| wanted.contains(f)),
            None => true,
        }
    }
}

/// Events emitted by subscriptions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// Current state at subscription time.
    Snapshot {
        sequence: Sequence,
        state: AppStateRecord,
    },

    /// A dispatched action changed the state.
    StateChanged {
        sequence: Sequence,
        /// Tag of the action that caused the change.
        action: String,
        changed: Vec<StateField>,
        state: AppStateRecord,
    },

    /// Subscription was dropped.
    Dropped { reason: DropReason },
}

/// Why a subscription was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Send buffer overflowed (slow consumer).
    BufferOverflow,
    /// Explicitly unsubscribed.
    Unsubscribed,
}

/// Unique identifier for a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Handle to manage a subscription.
pub struct SubscriptionHandle {
    pub id: SubscriptionId,
    /// Channel to receive events.
    pub receiver: crossbeam_channel::Receiver<StoreEvent>,
}

impl SubscriptionHandle {
    /// Receive the next event (blocking).
    pub fn recv(&self) -> Result<StoreEvent, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event (non-blocking).
    pub fn try_recv(&self) -> Result<StoreEvent, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Receive with timeout.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<StoreEvent, crossbeam_channel::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

//! AppStore: the owner of the live app slice.

use crate::actions::Action;
use crate::error::Result;
use crate::persist::{RehydrateConfig, RehydratePayload};
use crate::state::reduce;
use crate::subscriptions::{
    StoreEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId, SubscriptionManager,
};
use crate::types::{AppStateRecord, RootState, Sequence};
use parking_lot::{Mutex, RwLock};
use serde_json::Value;

/// Store configuration.
#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    /// Starting record (None = the default record).
    pub initial_state: Option<AppStateRecord>,

    /// How persisted slices are decoded by `rehydrate_*`.
    pub rehydrate: RehydrateConfig,
}

/// Holds the authoritative app slice and applies actions to it.
///
/// There is no global instance; construct one and pass it where needed.
pub struct AppStore {
    /// Store configuration.
    config: StoreConfig,

    /// Current record and the sequence of the dispatch that produced it.
    state: RwLock<(AppStateRecord, Sequence)>,

    /// Subscription manager.
    subscriptions: SubscriptionManager,

    /// Serializes dispatches so events leave in sequence order.
    write_lock: Mutex<()>,
}

impl AppStore {
    /// Create a store.
    pub fn new(config: StoreConfig) -> Self {
        let initial = config.initial_state.clone().unwrap_or_default();
        Self {
            config,
            state: RwLock::new((initial, Sequence::default())),
            subscriptions: SubscriptionManager::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // --- Dispatch ---

    /// Apply an action and return the resulting record.
    pub fn dispatch(&self, action: &Action) -> AppStateRecord {
        let _lock = self.write_lock.lock();

        let (previous, sequence) = self.state.read().clone();
        let next = reduce(Some(previous.clone()), action);
        let sequence = sequence.next();
        let changed = previous.changed_fields(&next);

        *self.state.write() = (next.clone(), sequence);

        tracing::debug!(
            action = action.action_type(),
            seq = sequence.0,
            changed = changed.len(),
            "dispatched"
        );

        self.subscriptions
            .broadcast_change(sequence, action.action_type(), &changed, &next);

        next
    }

    /// Rehydrate from a JSON-encoded persisted root object.
    pub fn rehydrate_json(&self, root: &[u8]) -> Result<AppStateRecord> {
        let root: Value = serde_json::from_slice(root)?;
        self.rehydrate_root(&root)
    }

    /// Rehydrate from a MessagePack-encoded persisted root object.
    pub fn rehydrate_msgpack(&self, root: &[u8]) -> Result<AppStateRecord> {
        let root: Value = rmp_serde::from_slice(root)?;
        self.rehydrate_root(&root)
    }

    fn rehydrate_root(&self, root: &Value) -> Result<AppStateRecord> {
        let payload = RehydratePayload::from_root(root, &self.config.rehydrate)?;
        if payload.is_empty() {
            tracing::info!("no persisted app slice, rehydrating from current state");
        }
        Ok(self.dispatch(&Action::rehydrate(payload)))
    }

    // --- Reads ---

    /// Current record.
    pub fn state(&self) -> AppStateRecord {
        self.state.read().0.clone()
    }

    /// Current root state.
    pub fn root(&self) -> RootState {
        RootState { app: self.state() }
    }

    /// Sequence of the last dispatch (0 before any).
    pub fn sequence(&self) -> Sequence {
        self.state.read().1
    }

    /// Language currently selected.
    pub fn current_language(&self) -> Option<String> {
        crate::state::current_language(&self.root()).map(str::to_string)
    }

    /// The slice the persistence layer should write.
    pub fn persisted_slice(&self) -> RehydratePayload {
        RehydratePayload::from(&self.state.read().0)
    }

    // --- Subscriptions ---

    /// Subscribe to state changes. The first event is a snapshot of the current state.
    pub fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        // Hold off dispatches so no change slips in before the snapshot.
        let _lock = self.write_lock.lock();

        let handle = self.subscriptions.subscribe(config);
        let (state, sequence) = self.state.read().clone();

        if let Err(e) = self
            .subscriptions
            .send_to(handle.id, StoreEvent::Snapshot { sequence, state })
        {
            tracing::warn!(subscription = handle.id.0, error = %e, "failed to deliver snapshot");
        }

        handle
    }

    /// Remove a subscription.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id);
    }

    /// Number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.subscription_count()
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LifecyclePhase, StateField};

    #[test]
    fn test_dispatch_bumps_sequence() {
        let store = AppStore::default();
        assert_eq!(store.sequence(), Sequence(0));

        store.dispatch(&Action::Lock);
        store.dispatch(&Action::Unrecognized);
        assert_eq!(store.sequence(), Sequence(2));
        assert!(store.state().locked);
    }

    #[test]
    fn test_initial_state() {
        let initial = AppStateRecord {
            logged_in: true,
            ..Default::default()
        };
        let store = AppStore::new(StoreConfig {
            initial_state: Some(initial.clone()),
            ..Default::default()
        });
        assert_eq!(store.state(), initial);
    }

    #[test]
    fn test_subscriber_gets_snapshot_then_changes() {
        let store = AppStore::default();
        let handle = store.subscribe(SubscriptionConfig::default());

        match handle.try_recv().unwrap() {
            StoreEvent::Snapshot { sequence, state } => {
                assert_eq!(sequence, Sequence(0));
                assert_eq!(state, AppStateRecord::default());
            }
            other => panic!("Expected Snapshot, got {:?}", other),
        }

        store.dispatch(&Action::set_app_state("background"));
        match handle.try_recv().unwrap() {
            StoreEvent::StateChanged { changed, state, .. } => {
                assert_eq!(changed, vec![StateField::AppState]);
                assert_eq!(state.app_state, LifecyclePhase::Background);
            }
            other => panic!("Expected StateChanged, got {:?}", other),
        }
    }

    #[test]
    fn test_rehydrate_json() {
        let store = AppStore::default();
        let root = br#"{"app": {"lockWithPinEnabled": true, "language": "es-419"}}"#;

        let state = store.rehydrate_json(root).unwrap();
        assert!(state.locked);
        assert_eq!(store.current_language().as_deref(), Some("es-419"));
    }
}

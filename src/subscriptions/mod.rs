//! Subscription system for live app-state updates.
//!
//! Subscribers receive a snapshot of the current record, then one event
//! per dispatch that changed it. Buffers are bounded; a subscriber that
//! falls behind is dropped.
//!
//! # Example
//!
//! ```ignore
//! let store = AppStore::new(StoreConfig::default());
//!
//! // Only wake up when the lock status changes
//! let handle = store.subscribe(SubscriptionConfig {
//!     filter: SubscriptionFilter::fields(vec![StateField::Locked]),
//!     ..Default::default()
//! });
//!
//! loop {
//!     match handle.recv() {
//!         Ok(StoreEvent::Snapshot { state, .. }) => render(&state),
//!         Ok(StoreEvent::StateChanged { state, .. }) => render(&state),
//!         Ok(StoreEvent::Dropped { .. }) | Err(_) => break,
//!     }
//! }
//! ```

mod manager;
mod types;

pub use manager::SubscriptionManager;
pub use types::{
    DropReason, StoreEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId,
};

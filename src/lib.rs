//! # App State
//!
//! The global "app" slice of a mobile wallet: login and verification
//! flags, language, backup flow, analytics opt-in, PIN lock and the
//! OS lifecycle phase.
//!
//! ## Core Concepts
//!
//! - **Reducer**: a pure `(state, action) -> state` transition, total over all actions
//! - **Actions**: a closed, serde-tagged enum; actions of other slices decode as `Unrecognized`
//! - **Rehydration**: persisted slices are decoded field by field; lifecycle,
//!   lock and permission state are re-derived rather than restored
//! - **Store**: an explicitly owned holder of the live record with subscriptions
//!
//! ## Example
//!
//! ```ignore
//! use app_state::{Action, AppStore, StoreConfig};
//!
//! let store = AppStore::new(StoreConfig::default());
//!
//! // Restore what was persisted on the last run
//! store.rehydrate_json(br#"{"app": {"loggedIn": true, "lockWithPinEnabled": true}}"#)?;
//! assert!(store.state().locked);
//!
//! store.dispatch(&Action::Unlock);
//! store.dispatch(&Action::set_app_state("background"));
//! ```

pub mod actions;
pub mod error;
pub mod persist;
pub mod state;
pub mod store;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use actions::{Action, REHYDRATE};
pub use error::{AppStateError, Result};
pub use persist::{RehydrateConfig, RehydratePayload, UnknownKeyPolicy, APP_NAMESPACE};
pub use state::{current_language, reduce};
pub use store::{AppStore, StoreConfig};
pub use subscriptions::{
    DropReason, StoreEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId, SubscriptionManager,
};
pub use types::*;

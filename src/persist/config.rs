//! Rehydration configuration.

/// Key of the app slice inside the persisted root object.
pub const APP_NAMESPACE: &str = "app";

/// Keys restored verbatim from a persisted slice.
pub(crate) const RESTORED_KEYS: [&str; 6] = [
    "loggedIn",
    "numberVerified",
    "language",
    "doingBackupFlow",
    "analyticsEnabled",
    "lockWithPinEnabled",
];

/// Keys that may be present in a persisted slice but are re-derived on rehydration.
pub(crate) const DERIVED_KEYS: [&str; 3] = ["appState", "locked", "requestingAndroidPermission"];

/// Keys written by older app versions. Always dropped silently.
pub(crate) const LEGACY_KEYS: [&str; 1] = ["loading"];

pub(crate) fn is_known_key(key: &str) -> bool {
    RESTORED_KEYS.contains(&key) || DERIVED_KEYS.contains(&key) || LEGACY_KEYS.contains(&key)
}

/// What to do with keys in a persisted slice that match no field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnknownKeyPolicy {
    /// Drop them silently.
    Ignore,
    /// Drop them and emit a warning.
    #[default]
    Warn,
    /// Fail decoding with [`crate::AppStateError::UnknownKeys`].
    Reject,
}

/// Rehydration configuration.
#[derive(Clone, Debug, Default)]
pub struct RehydrateConfig {
    /// Handling of unrecognized keys.
    /// Default: `Warn`
    pub unknown_keys: UnknownKeyPolicy,
}

impl RehydrateConfig {
    /// Lenient config, used when decoding rehydrate actions off the wire.
    pub fn lenient() -> Self {
        Self {
            unknown_keys: UnknownKeyPolicy::Ignore,
        }
    }

    /// Strict config: any unrecognized key is an error.
    pub fn strict() -> Self {
        Self {
            unknown_keys: UnknownKeyPolicy::Reject,
        }
    }
}

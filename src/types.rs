//! Core types for the app state slice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dispatch counter for a store (one per applied action).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Sequence(pub u64);

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seq({})", self.0)
    }
}

impl Sequence {
    pub fn next(self) -> Self {
        Sequence(self.0 + 1)
    }
}

/// OS-reported lifecycle phase of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LifecyclePhase {
    #[default]
    Active,
    Background,
    Inactive,
}

impl LifecyclePhase {
    /// Map the raw string the OS reports ("active", "background", "inactive").
    ///
    /// Returns `None` for anything else; callers keep their current phase.
    pub fn from_os_state(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(LifecyclePhase::Active),
            "background" => Some(LifecyclePhase::Background),
            "inactive" => Some(LifecyclePhase::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecyclePhase::Active => "active",
            LifecyclePhase::Background => "background",
            LifecyclePhase::Inactive => "inactive",
        };
        f.write_str(s)
    }
}

/// The "app" slice of the global state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStateRecord {
    pub logged_in: bool,
    pub number_verified: bool,
    /// Selected UI language code.
    pub language: Option<String>,
    pub doing_backup_flow: bool,
    pub analytics_enabled: bool,
    pub lock_with_pin_enabled: bool,
    pub app_state: LifecyclePhase,
    pub locked: bool,
    /// A permission dialog is in flight. Never restored from storage.
    pub requesting_android_permission: bool,
}

impl Default for AppStateRecord {
    fn default() -> Self {
        Self {
            logged_in: false,
            number_verified: false,
            language: None,
            doing_backup_flow: false,
            analytics_enabled: true,
            lock_with_pin_enabled: false,
            app_state: LifecyclePhase::Active,
            locked: false,
            requesting_android_permission: false,
        }
    }
}

impl AppStateRecord {
    /// Fields whose value differs between `self` and `other`, in declaration order.
    pub fn changed_fields(&self, other: &AppStateRecord) -> Vec<StateField> {
        let mut changed = Vec::new();
        if self.logged_in != other.logged_in {
            changed.push(StateField::LoggedIn);
        }
        if self.number_verified != other.number_verified {
            changed.push(StateField::NumberVerified);
        }
        if self.language != other.language {
            changed.push(StateField::Language);
        }
        if self.doing_backup_flow != other.doing_backup_flow {
            changed.push(StateField::DoingBackupFlow);
        }
        if self.analytics_enabled != other.analytics_enabled {
            changed.push(StateField::AnalyticsEnabled);
        }
        if self.lock_with_pin_enabled != other.lock_with_pin_enabled {
            changed.push(StateField::LockWithPinEnabled);
        }
        if self.app_state != other.app_state {
            changed.push(StateField::AppState);
        }
        if self.locked != other.locked {
            changed.push(StateField::Locked);
        }
        if self.requesting_android_permission != other.requesting_android_permission {
            changed.push(StateField::RequestingAndroidPermission);
        }
        changed
    }
}

/// Names a single field of [`AppStateRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StateField {
    LoggedIn,
    NumberVerified,
    Language,
    DoingBackupFlow,
    AnalyticsEnabled,
    LockWithPinEnabled,
    AppState,
    Locked,
    RequestingAndroidPermission,
}

impl StateField {
    /// Key of this field in the persisted slice.
    pub fn key(self) -> &'static str {
        match self {
            StateField::LoggedIn => "loggedIn",
            StateField::NumberVerified => "numberVerified",
            StateField::Language => "language",
            StateField::DoingBackupFlow => "doingBackupFlow",
            StateField::AnalyticsEnabled => "analyticsEnabled",
            StateField::LockWithPinEnabled => "lockWithPinEnabled",
            StateField::AppState => "appState",
            StateField::Locked => "locked",
            StateField::RequestingAndroidPermission => "requestingAndroidPermission",
        }
    }

    pub const ALL: [StateField; 9] = [
        StateField::LoggedIn,
        StateField::NumberVerified,
        StateField::Language,
        StateField::DoingBackupFlow,
        StateField::AnalyticsEnabled,
        StateField::LockWithPinEnabled,
        StateField::AppState,
        StateField::Locked,
        StateField::RequestingAndroidPermission,
    ];
}

impl fmt::Display for StateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The part of the application's root state owned by this crate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootState {
    pub app: AppStateRecord,
}

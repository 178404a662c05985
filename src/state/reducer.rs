//! The app slice reducer.

use crate::actions::Action;
use crate::types::{AppStateRecord, LifecyclePhase};

/// Apply an action to the app slice.
///
/// `None` starts from [`AppStateRecord::default`]. Never fails: actions owned
/// by other slices, and lifecycle strings the OS may add later, leave the
/// state as it was.
pub fn reduce(state: Option<AppStateRecord>, action: &Action) -> AppStateRecord {
    let state = state.unwrap_or_default();

    match action {
        Action::Rehydrate { payload } => {
            let mut next = state;
            payload.apply_to(&mut next);
            AppStateRecord {
                requesting_android_permission: false,
                app_state: LifecyclePhase::default(),
                // A missing flag restores as unlocked, matching a falsy value in the slice.
                locked: payload.lock_with_pin_enabled.unwrap_or(false),
                ..next
            }
        }

        Action::SetRequestingAndroidPermission { value } => AppStateRecord {
            requesting_android_permission: *value,
            ..state
        },

        Action::SetAppState { state: raw } => {
            let app_state = LifecyclePhase::from_os_state(raw).unwrap_or(state.app_state);
            AppStateRecord { app_state, ..state }
        }

        Action::SetLoggedIn { logged_in } => AppStateRecord {
            logged_in: *logged_in,
            ..state
        },

        Action::SetNumberVerified { number_verified } => AppStateRecord {
            number_verified: *number_verified,
            ..state
        },

        Action::SetLanguage { language } => AppStateRecord {
            language: language.clone(),
            ..state
        },

        Action::ResetAppOpenedState => AppStateRecord {
            logged_in: false,
            number_verified: false,
            language: None,
            ..state
        },

        Action::EnterBackupFlow => AppStateRecord {
            doing_backup_flow: true,
            ..state
        },

        Action::ExitBackupFlow => AppStateRecord {
            doing_backup_flow: false,
            ..state
        },

        Action::SetAnalyticsEnabled { enabled } => AppStateRecord {
            analytics_enabled: *enabled,
            ..state
        },

        Action::SetLockWithPinEnabled { enabled } => AppStateRecord {
            lock_with_pin_enabled: *enabled,
            ..state
        },

        Action::Lock => AppStateRecord {
            locked: true,
            ..state
        },

        Action::Unlock => AppStateRecord {
            locked: false,
            ..state
        },

        Action::Unrecognized => state,
    }
}

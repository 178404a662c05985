//! Actions consumed by the app reducer.

use crate::persist::RehydratePayload;
use serde::{Deserialize, Serialize};

/// Tag of the rehydrate action, owned by the persistence layer.
pub const REHYDRATE: &str = "persist/REHYDRATE";

/// An action dispatched to the app slice, tagged on `"type"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Restore the persisted slice at startup.
    #[serde(rename = "persist/REHYDRATE")]
    Rehydrate {
        #[serde(default, with = "crate::persist::root_slice")]
        payload: RehydratePayload,
    },

    #[serde(rename = "APP/SET_REQUESTING_ANDROID_PERMISSION")]
    SetRequestingAndroidPermission { value: bool },

    /// Raw lifecycle string as reported by the OS.
    #[serde(rename = "APP/SET_APP_STATE")]
    SetAppState { state: String },

    #[serde(rename = "APP/SET_LOGGED_IN")]
    SetLoggedIn {
        #[serde(rename = "loggedIn")]
        logged_in: bool,
    },

    #[serde(rename = "APP/SET_NUMBER_VERIFIED")]
    SetNumberVerified {
        #[serde(rename = "numberVerified")]
        number_verified: bool,
    },

    #[serde(rename = "APP/SET_LANGUAGE")]
    SetLanguage { language: Option<String> },

    #[serde(rename = "APP/RESET_APP_OPENED_STATE")]
    ResetAppOpenedState,

    #[serde(rename = "APP/ENTER_BACKUP_FLOW")]
    EnterBackupFlow,

    #[serde(rename = "APP/EXIT_BACKUP_FLOW")]
    ExitBackupFlow,

    #[serde(rename = "APP/SET_ANALYTICS_ENABLED")]
    SetAnalyticsEnabled { enabled: bool },

    #[serde(rename = "APP/SET_LOCK_WITH_PIN_ENABLED")]
    SetLockWithPinEnabled { enabled: bool },

    #[serde(rename = "APP/LOCK")]
    Lock,

    #[serde(rename = "APP/UNLOCK")]
    Unlock,

    /// Any action owned by another slice.
    #[serde(other)]
    Unrecognized,
}

impl Action {
    /// The `"type"` tag of this action.
    pub fn action_type(&self) -> &'static str {
        match self {
            Action::Rehydrate { .. } => REHYDRATE,
            Action::SetRequestingAndroidPermission { .. } => "APP/SET_REQUESTING_ANDROID_PERMISSION",
            Action::SetAppState { .. } => "APP/SET_APP_STATE",
            Action::SetLoggedIn { .. } => "APP/SET_LOGGED_IN",
            Action::SetNumberVerified { .. } => "APP/SET_NUMBER_VERIFIED",
            Action::SetLanguage { .. } => "APP/SET_LANGUAGE",
            Action::ResetAppOpenedState => "APP/RESET_APP_OPENED_STATE",
            Action::EnterBackupFlow => "APP/ENTER_BACKUP_FLOW",
            Action::ExitBackupFlow => "APP/EXIT_BACKUP_FLOW",
            Action::SetAnalyticsEnabled { .. } => "APP/SET_ANALYTICS_ENABLED",
            Action::SetLockWithPinEnabled { .. } => "APP/SET_LOCK_WITH_PIN_ENABLED",
            Action::Lock => "APP/LOCK",
            Action::Unlock => "APP/UNLOCK",
            Action::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Rehydrate from an already-decoded slice.
    pub fn rehydrate(payload: RehydratePayload) -> Self {
        Action::Rehydrate { payload }
    }

    pub fn set_app_state(raw: impl Into<String>) -> Self {
        Action::SetAppState { state: raw.into() }
    }

    pub fn set_language(language: Option<&str>) -> Self {
        Action::SetLanguage {
            language: language.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_tagged_actions() {
        let action: Action =
            serde_json::from_value(json!({"type": "APP/SET_LOGGED_IN", "loggedIn": true}))
                .unwrap();
        assert_eq!(action, Action::SetLoggedIn { logged_in: true });

        let action: Action =
            serde_json::from_value(json!({"type": "APP/SET_APP_STATE", "state": "background"}))
                .unwrap();
        assert_eq!(action, Action::set_app_state("background"));

        let action: Action =
            serde_json::from_value(json!({"type": "APP/SET_LANGUAGE", "language": null}))
                .unwrap();
        assert_eq!(action, Action::SetLanguage { language: None });

        let action: Action = serde_json::from_value(json!({"type": "APP/LOCK"})).unwrap();
        assert_eq!(action, Action::Lock);
    }

    #[test]
    fn test_other_slices_actions_are_unrecognized() {
        let action: Action = serde_json::from_value(
            json!({"type": "ACCOUNT/SET_NAME", "name": "Alice"}),
        )
        .unwrap();
        assert_eq!(action, Action::Unrecognized);
    }

    #[test]
    fn test_decode_rehydrate_takes_app_slice() {
        let action: Action = serde_json::from_value(json!({
            "type": "persist/REHYDRATE",
            "key": "root",
            "payload": {
                "app": {"lockWithPinEnabled": true, "language": "de"},
                "send": {"recentRecipients": []},
            },
        }))
        .unwrap();

        match action {
            Action::Rehydrate { payload } => {
                assert_eq!(payload.lock_with_pin_enabled, Some(true));
                assert_eq!(payload.language, Some(Some("de".to_string())));
            }
            other => panic!("Expected Rehydrate, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rehydrate_without_payload() {
        let action: Action =
            serde_json::from_value(json!({"type": "persist/REHYDRATE", "key": "root"})).unwrap();
        assert_eq!(action, Action::rehydrate(RehydratePayload::default()));

        let action: Action = serde_json::from_value(
            json!({"type": "persist/REHYDRATE", "payload": null}),
        )
        .unwrap();
        assert_eq!(action, Action::rehydrate(RehydratePayload::default()));
    }

    #[test]
    fn test_encode_uses_wire_tags() {
        let value = serde_json::to_value(Action::SetLockWithPinEnabled { enabled: true }).unwrap();
        assert_eq!(
            value,
            json!({"type": "APP/SET_LOCK_WITH_PIN_ENABLED", "enabled": true})
        );

        let value = serde_json::to_value(Action::EnterBackupFlow).unwrap();
        assert_eq!(value["type"], Action::EnterBackupFlow.action_type());
    }
}

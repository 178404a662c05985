//! Typed partial app slice restored on rehydration.

use super::config::{is_known_key, RehydrateConfig, UnknownKeyPolicy, APP_NAMESPACE};
use crate::error::{AppStateError, Result};
use crate::types::AppStateRecord;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A persisted app slice. Absent fields leave the current state untouched.
///
/// Only the user-controlled fields are carried: lifecycle phase, lock status
/// and the permission flag are re-derived by the reducer on every rehydration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RehydratePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_in: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_verified: Option<bool>,

    /// `Some(None)` is an explicit `null`, which clears the language.
    #[serde(
        default,
        deserialize_with = "present_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doing_backup_flow: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_with_pin_enabled: Option<bool>,
}

/// A present key always yields `Some`, so `null` survives as `Some(None)`.
fn present_nullable<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl RehydratePayload {
    /// Decode a JSON-encoded slice.
    pub fn from_json_slice(bytes: &[u8], config: &RehydrateConfig) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_json_value(value, config)
    }

    /// Decode a MessagePack-encoded slice.
    pub fn from_msgpack_slice(bytes: &[u8], config: &RehydrateConfig) -> Result<Self> {
        let value: Value = rmp_serde::from_slice(bytes)?;
        Self::from_json_value(value, config)
    }

    /// Decode a slice that has already been parsed.
    ///
    /// `null` decodes to the empty payload.
    pub fn from_json_value(value: Value, config: &RehydrateConfig) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => {
                check_unknown_keys(map.keys(), config)?;
                Ok(serde_json::from_value(Value::Object(map))?)
            }
            other => Err(AppStateError::InvalidPayload(format!(
                "expected an object for the app slice, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// Take the app slice out of a persisted root object.
    ///
    /// A missing slice, or a `null` root, yields the empty payload.
    pub fn from_root(root: &Value, config: &RehydrateConfig) -> Result<Self> {
        match root {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => match map.get(APP_NAMESPACE) {
                Some(slice) => Self::from_json_value(slice.clone(), config),
                None => Ok(Self::default()),
            },
            other => Err(AppStateError::InvalidPayload(format!(
                "expected an object for the persisted root, got {}",
                value_kind(other)
            ))),
        }
    }

    /// Encode as a MessagePack map with named keys.
    pub fn to_msgpack(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    /// Encode as a JSON object.
    pub fn to_json_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| AppStateError::Serialization(e.to_string()))
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay the present fields onto `record`.
    pub fn apply_to(&self, record: &mut AppStateRecord) {
        if let Some(v) = self.logged_in {
            record.logged_in = v;
        }
        if let Some(v) = self.number_verified {
            record.number_verified = v;
        }
        if let Some(ref v) = self.language {
            record.language = v.clone();
        }
        if let Some(v) = self.doing_backup_flow {
            record.doing_backup_flow = v;
        }
        if let Some(v) = self.analytics_enabled {
            record.analytics_enabled = v;
        }
        if let Some(v) = self.lock_with_pin_enabled {
            record.lock_with_pin_enabled = v;
        }
    }
}

impl From<&AppStateRecord> for RehydratePayload {
    fn from(record: &AppStateRecord) -> Self {
        Self {
            logged_in: Some(record.logged_in),
            number_verified: Some(record.number_verified),
            language: Some(record.language.clone()),
            doing_backup_flow: Some(record.doing_backup_flow),
            analytics_enabled: Some(record.analytics_enabled),
            lock_with_pin_enabled: Some(record.lock_with_pin_enabled),
        }
    }
}

fn check_unknown_keys<'a, I>(keys: I, config: &RehydrateConfig) -> Result<()>
where
    I: Iterator<Item = &'a String>,
{
    let unknown: Vec<String> = keys.filter(|k| !is_known_key(k)).cloned().collect();
    if unknown.is_empty() {
        return Ok(());
    }

    match config.unknown_keys {
        UnknownKeyPolicy::Ignore => Ok(()),
        UnknownKeyPolicy::Warn => {
            tracing::warn!(keys = ?unknown, "dropping unknown keys from persisted app slice");
            Ok(())
        }
        UnknownKeyPolicy::Reject => Err(AppStateError::UnknownKeys(unknown)),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_partial_slice() {
        let payload = RehydratePayload::from_json_value(
            json!({"loggedIn": true, "language": "pt-BR"}),
            &RehydrateConfig::default(),
        )
        .unwrap();

        assert_eq!(payload.logged_in, Some(true));
        assert_eq!(payload.language, Some(Some("pt-BR".to_string())));
        assert_eq!(payload.number_verified, None);
        assert_eq!(payload.lock_with_pin_enabled, None);
    }

    #[test]
    fn test_null_language_is_present() {
        let payload = RehydratePayload::from_json_value(
            json!({"language": null}),
            &RehydrateConfig::default(),
        )
        .unwrap();
        assert_eq!(payload.language, Some(None));

        let mut record = AppStateRecord {
            language: Some("en-US".to_string()),
            ..Default::default()
        };
        payload.apply_to(&mut record);
        assert_eq!(record.language, None);
    }

    #[test]
    fn test_derived_and_legacy_keys_are_known() {
        let slice = json!({
            "loading": true,
            "appState": "Background",
            "locked": true,
            "requestingAndroidPermission": true,
            "analyticsEnabled": false,
        });
        let payload =
            RehydratePayload::from_json_value(slice, &RehydrateConfig::strict()).unwrap();
        assert_eq!(payload.analytics_enabled, Some(false));
    }

    #[test]
    fn test_unknown_keys_policy() {
        let slice = json!({"loggedIn": true, "sessionToken": "abc"});

        let payload =
            RehydratePayload::from_json_value(slice.clone(), &RehydrateConfig::lenient()).unwrap();
        assert_eq!(payload.logged_in, Some(true));

        let payload =
            RehydratePayload::from_json_value(slice.clone(), &RehydrateConfig::default()).unwrap();
        assert_eq!(payload.logged_in, Some(true));

        let result = RehydratePayload::from_json_value(slice, &RehydrateConfig::strict());
        match result {
            Err(AppStateError::UnknownKeys(keys)) => assert_eq!(keys, vec!["sessionToken"]),
            other => panic!("Expected UnknownKeys, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = RehydratePayload::from_json_value(
            json!({"loggedIn": "yes"}),
            &RehydrateConfig::default(),
        );
        assert!(matches!(result, Err(AppStateError::Deserialization(_))));
    }

    #[test]
    fn test_non_object_slice() {
        let result =
            RehydratePayload::from_json_value(json!([1, 2]), &RehydrateConfig::default());
        assert!(matches!(result, Err(AppStateError::InvalidPayload(_))));

        let empty =
            RehydratePayload::from_json_value(Value::Null, &RehydrateConfig::default()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_root() {
        let root = json!({
            "app": {"numberVerified": true},
            "identity": {"address": "0x0"},
        });
        let payload = RehydratePayload::from_root(&root, &RehydrateConfig::strict()).unwrap();
        assert_eq!(payload.number_verified, Some(true));

        let missing =
            RehydratePayload::from_root(&json!({"identity": {}}), &RehydrateConfig::strict())
                .unwrap();
        assert!(missing.is_empty());

        let result = RehydratePayload::from_root(&json!("app"), &RehydrateConfig::default());
        assert!(matches!(result, Err(AppStateError::InvalidPayload(_))));
    }

    #[test]
    fn test_msgpack_slice() {
        let record = AppStateRecord {
            logged_in: true,
            lock_with_pin_enabled: true,
            language: Some("es-419".to_string()),
            ..Default::default()
        };
        let bytes = RehydratePayload::from(&record).to_msgpack().unwrap();

        let payload =
            RehydratePayload::from_msgpack_slice(&bytes, &RehydrateConfig::strict()).unwrap();
        assert_eq!(payload, RehydratePayload::from(&record));
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let payload = RehydratePayload {
            doing_backup_flow: Some(true),
            language: Some(None),
            ..Default::default()
        };
        let value = payload.to_json_value().unwrap();
        assert_eq!(value, json!({"doingBackupFlow": true, "language": null}));
    }
}

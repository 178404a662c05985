//! Serde adapter for the `payload` of a rehydrate action.
//!
//! On the wire the payload is the whole persisted root object; only its
//! app slice is kept.

use super::config::RehydrateConfig;
use super::payload::RehydratePayload;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Serialize)]
struct Root<'a> {
    app: &'a RehydratePayload,
}

pub(crate) fn serialize<S>(payload: &RehydratePayload, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Root { app: payload }.serialize(serializer)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<RehydratePayload, D::Error>
where
    D: Deserializer<'de>,
{
    let root = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    RehydratePayload::from_root(&root, &RehydrateConfig::lenient()).map_err(D::Error::custom)
}

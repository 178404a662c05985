//! Boundary with the external persistence layer.
//!
//! The persisted root object carries the app slice under the `"app"` key.
//! Slices are decoded into a typed partial record field by field; keys
//! this crate does not know are handled per [`UnknownKeyPolicy`].

mod config;
mod payload;
pub(crate) mod root_slice;

pub use config::{RehydrateConfig, UnknownKeyPolicy, APP_NAMESPACE};
pub use payload::RehydratePayload;

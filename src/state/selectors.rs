//! Read-only projections over the root state.

use crate::types::RootState;

/// The language the UI should render in, if the user picked one.
pub fn current_language(root: &RootState) -> Option<&str> {
    root.app.language.as_deref()
}

//! State transitions and selectors for the app slice.
//!
//! Every transition is a pure function of the previous record and an
//! action; the store owns the only live instance.

mod reducer;
mod selectors;

pub use reducer::reduce;
pub use selectors::current_language;

//! Browser helpers.
//!
//! - [`dom`] - window, body classes, focus, reload
//! - [`sanitize_markup`] - whitelist filter for terminal markup

pub mod dom;
mod sanitize;

pub use sanitize::sanitize_markup;

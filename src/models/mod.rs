//! UI state types for the page.
//!
//! Terminal output types live in `termfolio_core::models`.
//!
//! - [`ScreenMode`] - boot screen vs. interactive page
//! - [`ModalView`] - which modal, if any, is open

mod view;

pub use view::{ModalView, ScreenMode, dismiss};

//! UI components built with Leptos.
//!
//! - [`Shell`] - The whole page (boot screen, HUD, hero, terminal, modal)
//! - [`backdrop`] - Matrix rain and particle canvas
//! - [`hero`] - Title, typewriter line and project cards
//! - [`hexdump`] - Scrolling memory dump decoration
//! - [`icons`] - Centralized icon definitions
//! - [`modal`] - Project and contact modals
//! - [`status`] - HUD bar with clock, theme switcher and rain toggle
//! - [`terminal`] - Terminal emulator interface

pub mod backdrop;
pub mod hero;
pub mod hexdump;
mod hooks;
pub mod icons;
pub mod modal;
pub mod status;
pub mod terminal;

pub use terminal::Shell;

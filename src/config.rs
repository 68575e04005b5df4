//! Front-end configuration.
//!
//! Shared text and effect timings live in `termfolio_core::config`; this
//! module only holds what the browser UI needs on top of them.

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of terminal output lines to keep in history.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

// =============================================================================
// Page Content
// =============================================================================

/// Hero heading until root mode replaces it.
pub const HERO_TITLE: &str = "TEZZZT";

pub const PROJECTS_HEADING: &str = "ACTIVE_MODULES";

pub const GITHUB_URL: &str = "https://github.com/TezzzT";

pub const CONTACT_EMAIL: &str = "root@tezzzt.io";

// =============================================================================
// HUD Configuration
// =============================================================================

/// Clock refresh interval.
pub const CLOCK_TICK_MS: u32 = 1000;

/// Matrix canvas opacity while the rain is enabled.
pub const RAIN_OPACITY: &str = "0.1";

// =============================================================================
// Markup Whitelist
// =============================================================================

/// Inline tags allowed in terminal markup lines.
pub const MARKUP_TAGS: &[&str] = &["span", "br"];

/// Attributes allowed on any whitelisted tag.
pub const MARKUP_ATTRIBUTES: &[&str] = &["class"];

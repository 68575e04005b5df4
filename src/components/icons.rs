//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap icons so components never name an
//! icon set directly.

use icondata::Icon;

pub const TERMINAL: Icon = icondata::BsTerminal;
pub const CLOCK: Icon = icondata::BsClock;
pub const CLOSE: Icon = icondata::BsXLg;
pub const RAIN_ON: Icon = icondata::BsEye;
pub const RAIN_OFF: Icon = icondata::BsEyeSlash;
pub const GITHUB: Icon = icondata::BsGithub;
pub const MAIL: Icon = icondata::BsEnvelope;
pub const LOCK: Icon = icondata::BsLockFill;

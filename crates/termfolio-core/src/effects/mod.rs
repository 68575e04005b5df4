//! Decorative page effects as plain state machines.
//!
//! The front end owns the timers and the DOM; everything here is driven by
//! explicit ticks and an injected random source, so it runs the same in the
//! browser and in tests.

mod backdrop;
mod boot;
mod decrypt;
mod hexdump;
mod konami;
mod modal;
mod theme;
mod tilt;
mod typewriter;

pub use backdrop::{Glyph, Link, MatrixRain, Particle, ParticleField};
pub use boot::{BootStep, boot_script, welcome_line};
pub use decrypt::Decrypt;
pub use hexdump::{HexRow, HexTicker};
pub use konami::{KonamiDetector, unlock_notice};
pub use modal::{MODALS, ModalEntry, Transmission, TransmitFrame, find_modal};
pub use theme::Theme;
pub use tilt::{Reveal, rest_transform, tilt_angles, tilt_transform};
pub use typewriter::{TypeFrame, Typewriter};

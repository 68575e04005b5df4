//! 3D tilt transform for hovered panels, and their one-time fade-in.

use crate::config::tilt::{HOVER_SCALE, MAX_DEG, PERSPECTIVE_PX};

/// Rotation for a pointer at `(x, y)` inside a `width` x `height` panel.
///
/// Coordinates are relative to the panel's top-left corner. Returns
/// `(rotate_x, rotate_y)` in degrees, each within `±MAX_DEG` while the
/// pointer stays inside the panel.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    if center_x <= 0.0 || center_y <= 0.0 {
        return (0.0, 0.0);
    }
    let rotate_x = ((y - center_y) / center_y) * -MAX_DEG;
    let rotate_y = ((x - center_x) / center_x) * MAX_DEG;
    (rotate_x, rotate_y)
}

/// CSS transform for a pointer position.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let (rotate_x, rotate_y) = tilt_angles(x, y, width, height);
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
        PERSPECTIVE_PX, rotate_x, rotate_y, HOVER_SCALE
    )
}

/// CSS transform once the pointer leaves the panel.
pub fn rest_transform() -> String {
    format!("perspective({}px) rotateX(0) rotateY(0) scale(1)", PERSPECTIVE_PX)
}

/// Fade-in latch for a panel scrolled into view.
///
/// Once shown, the panel stays shown even after scrolling away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    shown: bool,
}

impl Reveal {
    /// Feed intersection flags from one observer callback. Returns `true`
    /// only on the call that first reveals the panel.
    pub fn observe(&mut self, intersecting: impl IntoIterator<Item = bool>) -> bool {
        if self.shown || !intersecting.into_iter().any(|hit| hit) {
            return false;
        }
        self.shown = true;
        true
    }

    pub fn is_shown(self) -> bool {
        self.shown
    }

    pub fn opacity(self) -> &'static str {
        if self.shown { "1" } else { "0" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_flat() {
        let (rx, ry) = tilt_angles(50.0, 25.0, 100.0, 50.0);
        assert_eq!(rx, 0.0);
        assert_eq!(ry, 0.0);
    }

    #[test]
    fn test_corners_hit_max() {
        assert_eq!(tilt_angles(0.0, 0.0, 100.0, 50.0), (5.0, -5.0));
        assert_eq!(tilt_angles(100.0, 50.0, 100.0, 50.0), (-5.0, 5.0));
    }

    #[test]
    fn test_degenerate_rect() {
        assert_eq!(tilt_angles(3.0, 3.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_transform_strings() {
        assert_eq!(
            tilt_transform(100.0, 50.0, 100.0, 50.0),
            "perspective(1000px) rotateX(-5deg) rotateY(5deg) scale(1.02)"
        );
        assert_eq!(
            rest_transform(),
            "perspective(1000px) rotateX(0) rotateY(0) scale(1)"
        );
    }

    #[test]
    fn test_reveal_latches() {
        let mut reveal = Reveal::default();
        assert_eq!(reveal.opacity(), "0");

        assert!(!reveal.observe([false]));
        assert!(!reveal.observe([]));
        assert!(!reveal.is_shown());

        assert!(reveal.observe([false, true]));
        assert_eq!(reveal.opacity(), "1");

        // leaving the viewport keeps it visible and reports nothing new
        assert!(!reveal.observe([false]));
        assert!(!reveal.observe([true]));
        assert!(reveal.is_shown());
    }
}

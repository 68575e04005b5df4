//! Color themes.

use std::fmt;

/// Accent color theme applied to the page body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Green,
    Red,
    Blue,
    Amber,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Green, Theme::Red, Theme::Blue, Theme::Amber];

    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Amber => "amber",
        }
    }

    /// Accent color for canvas drawing.
    pub fn accent_hex(self) -> &'static str {
        match self {
            Self::Green => "#00ff9d",
            Self::Red => "#ff003c",
            Self::Blue => "#00b7ff",
            Self::Amber => "#ffb000",
        }
    }

    /// Body class for this theme. The default theme uses none.
    pub fn body_class(self) -> Option<String> {
        match self {
            Self::Green => None,
            other => Some(format!("theme-{}", other.name())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

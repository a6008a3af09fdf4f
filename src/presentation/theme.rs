//! Colours and symbols shared by the textual reporters.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

/// Summary line icons, unicode or ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                success: "✓",
                error: "✗",
                warning: "⚠",
            }
        } else {
            Self {
                success: "[OK]",
                error: "[FAIL]",
                warning: "[WARN]",
            }
        }
    }
}

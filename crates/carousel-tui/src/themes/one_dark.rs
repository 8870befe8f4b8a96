//! One Dark theme (Atom)

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2c, 0x34),
        bg1: Color::Rgb(0x21, 0x25, 0x2b),
        bg2: Color::Rgb(0x3e, 0x44, 0x51),
        fg0: Color::Rgb(0xab, 0xb2, 0xbf),
        fg1: Color::Rgb(0xc8, 0xcc, 0xd4),
        muted: Color::Rgb(0x7f, 0x84, 0x8e),
        border: Color::Rgb(0x3e, 0x44, 0x51),
        accent: Color::Rgb(0x61, 0xaf, 0xef),   // Blue
        inactive: Color::Rgb(0x5c, 0x63, 0x70),
        warning: Color::Rgb(0xe5, 0xc0, 0x7b),  // Yellow
        success: Color::Rgb(0x98, 0xc3, 0x79),  // Green
    }
}

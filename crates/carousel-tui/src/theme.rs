use ratatui::style::Color;

/// Colors used by the slideshow chrome
#[derive(Debug, Clone)]
pub struct Theme {
    /// Backdrop behind the slides
    pub bg0: Color,
    /// Caption box, popups, alt-text panels
    pub bg1: Color,
    /// Status bar
    pub bg2: Color,

    pub fg0: Color,
    pub fg1: Color,
    /// Secondary text (caption note, hints)
    pub muted: Color,
    pub border: Color,

    /// Active dot, enabled arrows, key hints
    pub accent: Color,
    /// Inactive dots and disabled arrows
    pub inactive: Color,
    /// Paused indicator
    pub warning: Color,
    /// Playing indicator
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            muted: Color::Rgb(0xa8, 0x99, 0x84),
            border: Color::Rgb(0x7c, 0x6f, 0x64),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            inactive: Color::Rgb(0x66, 0x5c, 0x54),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
            success: Color::Rgb(0xa9, 0xb6, 0x65),
        }
    }
}

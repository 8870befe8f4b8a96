//! Theme registry and loader

mod dracula;
mod nord;
mod one_dark;

use ratatui::style::Color;
use tracing::warn;

use carousel_core::config::UiConfig;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        // Short form: each digit doubled
        3 => Some(Color::Rgb(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Look up a built-in theme by name
pub fn theme_by_name(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "gruvbox" | "gruvbox-dark" => Some(Theme::default()),
        "nord" => Some(nord::default()),
        "dracula" => Some(dracula::default()),
        "one-dark" | "onedark" => Some(one_dark::default()),
        _ => None,
    }
}

/// Load the configured theme, applying the accent override if any
pub fn load_theme(config: &UiConfig) -> Theme {
    let mut theme = theme_by_name(&config.theme).unwrap_or_else(|| {
        warn!("Unknown theme '{}', using gruvbox-dark", config.theme);
        Theme::default()
    });

    if let Some(ref hex) = config.accent {
        match parse_hex_color(hex) {
            Some(color) => theme.accent = color,
            None => warn!("Invalid accent color '{}', keeping theme accent", hex),
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "nord", "dracula", "one-dark"]
}

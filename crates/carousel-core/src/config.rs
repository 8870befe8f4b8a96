use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub slideshow: SlideshowConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for the log file written while the slideshow is on screen
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Deck opened when `carousel run` is given no path
    #[serde(default)]
    pub default_deck: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            default_deck: None,
        }
    }
}

/// Easing curve applied to the slide track while a transition animates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump straight to the end position on the last frame
    None,
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowConfig {
    /// Advance automatically while not paused
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Delay between automatic advances (0 = never)
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Length of the slide animation
    #[serde(default = "default_transition_duration")]
    pub transition_duration_ms: u64,
    /// Frames to hold the starting layout before the animation begins
    #[serde(default = "default_settle_frames")]
    pub settle_frames: u8,
    #[serde(default)]
    pub easing: EasingType,
    /// Redraw rate while a transition is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Pause autoplay while the mouse is over the slideshow
    #[serde(default = "default_true")]
    pub pause_on_hover: bool,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            autoplay: default_true(),
            autoplay_interval_ms: default_autoplay_interval(),
            transition_duration_ms: default_transition_duration(),
            settle_frames: default_settle_frames(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            pause_on_hover: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme name (e.g., "gruvbox-dark", "nord")
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Optional accent color override as hex ("#RRGGBB" or "#RGB")
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default = "default_true")]
    pub show_dots: bool,
    #[serde(default = "default_true")]
    pub show_caption: bool,
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: default_theme_name(),
            accent: None,
            show_dots: default_true(),
            show_caption: default_true(),
            show_status_bar: default_true(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "<C-n>" (Ctrl+n), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the slideshow
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Advance to the next slide
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Go back to the previous slide
    #[serde(default = "default_key_previous")]
    pub previous: String,
    /// Pause or resume autoplay
    #[serde(default = "default_key_toggle_pause")]
    pub toggle_pause: String,
    /// Jump to the first slide
    #[serde(default = "default_key_first")]
    pub first: String,
    /// Jump to the last slide
    #[serde(default = "default_key_last")]
    pub last: String,
    /// Show the key help popup
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next: default_key_next(),
            previous: default_key_previous(),
            toggle_pause: default_key_toggle_pause(),
            first: default_key_first(),
            last: default_key_last(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_previous() -> String { "h".to_string() }
fn default_key_toggle_pause() -> String { "<Space>".to_string() }
fn default_key_first() -> String { "g".to_string() }
fn default_key_last() -> String { "G".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carousel")
        .join("logs")
}

fn default_true() -> bool {
    true
}

fn default_autoplay_interval() -> u64 {
    6500
}

fn default_transition_duration() -> u64 {
    320
}

fn default_settle_frames() -> u8 {
    2 // place on one frame, animate from the one after
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Expand tilde (~) in path to user's home directory
pub fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults if it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }

    /// Get the log directory (with tilde expansion)
    pub fn log_dir(&self) -> PathBuf {
        expand_tilde(&self.general.log_dir)
    }

    /// Get the default deck path (with tilde expansion)
    pub fn default_deck(&self) -> Option<PathBuf> {
        self.general.default_deck.as_deref().map(expand_tilde)
    }
}

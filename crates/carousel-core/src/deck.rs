//! Slide deck files
//!
//! A deck is a TOML document with a `[[slides]]` array and an optional
//! `[slideshow]` table overriding the autoplay settings from the user config.
//! Relative image paths are resolved against the directory holding the deck.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SlideshowConfig;
use crate::slide::Slide;

/// Per-deck overrides of the slideshow settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub slideshow: DeckSettings,
    /// File the deck was loaded from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Deck {
    /// Load a deck file, resolving image paths relative to its directory
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::Deck(format!("failed to read {}: {}", path.display(), e))
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut deck = Self::from_toml(&content, base_dir)?;
        deck.source = Some(path.to_path_buf());
        debug!("Loaded deck {:?} with {} slides", path, deck.slides.len());
        Ok(deck)
    }

    /// Parse a deck from TOML; relative image paths are joined onto `base_dir`
    pub fn from_toml(content: &str, base_dir: &Path) -> crate::Result<Self> {
        let mut deck: Deck =
            toml::from_str(content).map_err(|e| crate::Error::Deck(e.to_string()))?;

        let before = deck.slides.len();
        deck.slides.retain(Slide::has_image);
        if deck.slides.len() < before {
            warn!(
                "Skipped {} slide(s) without an image reference",
                before - deck.slides.len()
            );
        }

        for slide in &mut deck.slides {
            if slide.image.is_relative() {
                slide.image = base_dir.join(&slide.image);
            }
        }

        Ok(deck)
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Apply this deck's overrides on top of a configured slideshow section
    pub fn apply_to(&self, config: &SlideshowConfig) -> SlideshowConfig {
        let mut merged = config.clone();
        if let Some(autoplay) = self.slideshow.autoplay {
            merged.autoplay = autoplay;
        }
        if let Some(interval) = self.slideshow.autoplay_interval_ms {
            merged.autoplay_interval_ms = interval;
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOMS: &str = r#"
        [slideshow]
        autoplay_interval_ms = 3000

        [[slides]]
        image = "images/meeting-2.jpg"
        alt = "Meeting room conference setup with a long table and rolling chairs"
        label = "Conference Setup"
        note = "Long table + comfortable rolling chairs"

        [[slides]]
        image = "/srv/photos/meeting-1.jpg"
        label = "Presentation Ready"
    "#;

    #[test]
    fn test_parse_deck_resolves_relative_paths() {
        let deck = Deck::from_toml(ROOMS, Path::new("/decks")).unwrap();
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(
            deck.slides[0].image,
            PathBuf::from("/decks/images/meeting-2.jpg")
        );
        assert_eq!(deck.slides[1].image, PathBuf::from("/srv/photos/meeting-1.jpg"));
        assert_eq!(deck.slides[1].note(), crate::slide::DEFAULT_NOTE);
    }

    #[test]
    fn test_slides_without_image_are_dropped() {
        let deck = Deck::from_toml(
            r#"
            [[slides]]
            image = ""
            label = "Nothing here"

            [[slides]]
            image = "a.png"
            "#,
            Path::new("."),
        )
        .unwrap();
        assert_eq!(deck.slides.len(), 1);
        assert!(deck.slides[0].image.ends_with("a.png"));
    }

    #[test]
    fn test_empty_deck_is_valid() {
        let deck = Deck::from_toml("", Path::new(".")).unwrap();
        assert!(deck.is_empty());
    }

    #[test]
    fn test_apply_overrides() {
        let deck = Deck::from_toml(ROOMS, Path::new(".")).unwrap();
        let merged = deck.apply_to(&SlideshowConfig::default());
        assert_eq!(merged.autoplay_interval_ms, 3000);
        assert!(merged.autoplay);
        assert_eq!(merged.transition_duration_ms, 320);
    }

    #[test]
    fn test_malformed_deck_is_deck_error() {
        let err = Deck::from_toml("[[slides]]\nlabel = 3", Path::new(".")).unwrap_err();
        assert!(matches!(err, crate::Error::Deck(_)));
    }

    #[test]
    fn test_missing_file_is_deck_error() {
        let err = Deck::load(Path::new("/nonexistent/carousel/deck.toml")).unwrap_err();
        assert!(matches!(err, crate::Error::Deck(_)));
    }
}

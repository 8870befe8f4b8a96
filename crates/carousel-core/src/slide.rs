use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Alt text shown when a slide does not provide one
pub const DEFAULT_ALT: &str = "Meeting room photo";
/// Caption title shown when a slide does not provide one
pub const DEFAULT_LABEL: &str = "Meeting Room";
/// Caption subtitle shown when a slide does not provide one
pub const DEFAULT_NOTE: &str = "Swipe / click arrows to browse";

/// One image plus its display metadata
///
/// Slides are immutable once handed to a [`Slideshow`](crate::Slideshow); the
/// controller only selects among them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Image reference (a file path for the terminal surface)
    pub image: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Slide {
    pub fn new(image: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
            alt: None,
            label: None,
            note: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn image(&self) -> &Path {
        &self.image
    }

    pub fn alt_text(&self) -> &str {
        non_blank(self.alt.as_deref()).unwrap_or(DEFAULT_ALT)
    }

    pub fn label(&self) -> &str {
        non_blank(self.label.as_deref()).unwrap_or(DEFAULT_LABEL)
    }

    pub fn note(&self) -> &str {
        non_blank(self.note.as_deref()).unwrap_or(DEFAULT_NOTE)
    }

    /// A slide without an image reference is skipped when a slideshow is built
    pub fn has_image(&self) -> bool {
        !self.image.as_os_str().is_empty()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use carousel_core::{Deck, Slide};

/// One slide as printed by `carousel list --json`
#[derive(Debug, Serialize)]
struct SlideEntry<'a> {
    index: usize,
    image: String,
    alt: &'a str,
    label: &'a str,
    note: &'a str,
    image_exists: bool,
}

impl<'a> SlideEntry<'a> {
    fn new(index: usize, slide: &'a Slide) -> Self {
        Self {
            index,
            image: slide.image().display().to_string(),
            alt: slide.alt_text(),
            label: slide.label(),
            note: slide.note(),
            image_exists: slide.image().exists(),
        }
    }
}

pub fn run(path: &Path, json: bool) -> Result<()> {
    let deck = Deck::load(path).with_context(|| format!("Failed to load deck {}", path.display()))?;
    let entries: Vec<SlideEntry> = deck
        .slides
        .iter()
        .enumerate()
        .map(|(i, slide)| SlideEntry::new(i, slide))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No slides in {}.", path.display());
        println!("\nAdd slides to the deck like this:");
        println!("  [[slides]]");
        println!("  image = \"images/room.jpg\"");
        println!("  label = \"Conference Setup\"");
        return Ok(());
    }

    println!("Slides in {} ({}):\n", path.display(), entries.len());

    for entry in &entries {
        let missing = if entry.image_exists { "" } else { " [MISSING]" };
        println!("  {}. {}", entry.index + 1, entry.label);
        println!("    Image: {}{}", entry.image, missing);
        println!("    Alt:   {}", entry.alt);
        println!("    Note:  {}", entry.note);
        println!();
    }

    if let Some(autoplay) = deck.slideshow.autoplay {
        println!("Deck autoplay: {}", if autoplay { "on" } else { "off" });
    }
    if let Some(interval) = deck.slideshow.autoplay_interval_ms {
        println!("Deck autoplay interval: {} ms", interval);
    }

    Ok(())
}

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use tokio::sync::mpsc;
use tracing::info;

use carousel_core::{AppConfig, Deck, Slideshow, SlideshowOptions};
use carousel_tui::{
    event::{AppEvent, EventHandler, ImageLoadResult},
    input::{handle_focus_lost, handle_key_event, handle_mouse_event},
    load_theme, App, TerminalSession,
};

use crate::RunArgs;

pub async fn run(mut config: AppConfig, args: RunArgs) -> Result<()> {
    let deck_path = resolve_deck(&config, args.deck.as_deref())?;
    let deck = Deck::load(&deck_path)
        .with_context(|| format!("Failed to load deck {}", deck_path.display()))?;

    apply_overrides(&mut config, &deck, &args);
    let config = Arc::new(config);

    let theme = load_theme(&config.ui);
    let title = deck_title(&deck_path);
    let slideshow = Slideshow::new(deck.slides, SlideshowOptions::from(&config.slideshow));
    let mut app = App::new(config.clone(), slideshow, theme, title.clone());

    // Decode images in the background; results come back through the channel
    let (img_tx, mut img_rx) = mpsc::unbounded_channel::<ImageLoadResult>();
    app.images.request_all(app.slideshow.slides(), &img_tx);

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    let mut session = TerminalSession::start(&format!("Carousel - {}", title))?;
    info!("Showing {} ({} slides)", deck_path.display(), app.slideshow.len());

    // Main loop
    loop {
        // Process any completed image loads (non-blocking)
        while let Ok(result) = img_rx.try_recv() {
            app.images.apply(result);
        }

        app.slideshow.poll_autoplay();

        session.terminal().draw(|frame| app.draw(frame))?;

        // Sleep until the next animation frame, autoplay fire or tick
        let timeout = app.poll_timeout(event_handler.tick_rate(), Instant::now());
        if let Some(event) = event_handler.next(timeout)? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app.keymap, app.help_visible());
                    app.apply(action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app.hit_areas, app.hovering);
                    app.apply(action);
                }
                AppEvent::FocusLost => {
                    let action = handle_focus_lost(app.hovering);
                    app.apply(action);
                }
                // Layout is recomputed on every draw
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.slideshow.teardown();
    session.restore()?;
    info!("Slideshow closed");

    Ok(())
}

fn resolve_deck(config: &AppConfig, deck: Option<&Path>) -> Result<PathBuf> {
    deck.map(Path::to_path_buf)
        .or_else(|| config.default_deck())
        .ok_or_else(|| {
            anyhow!(
                "No deck given.\nPass a deck file:\n  carousel path/to/deck.toml\n\nOr set general.default_deck in {}",
                AppConfig::config_path().display()
            )
        })
}

/// Layer deck settings and command-line flags over the config file
fn apply_overrides(config: &mut AppConfig, deck: &Deck, args: &RunArgs) {
    config.slideshow = deck.apply_to(&config.slideshow);
    if let Some(interval) = args.interval {
        config.slideshow.autoplay_interval_ms = interval;
    }
    if args.no_autoplay {
        config.slideshow.autoplay = false;
    }
    if let Some(ref theme) = args.theme {
        config.ui.theme = theme.clone();
    }
}

fn deck_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "carousel".to_string())
}

use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::{style::Style, widgets::Block, Frame};
use tracing::debug;

use carousel_core::{AppConfig, Intent, Slideshow};

use crate::images::SlideImages;
use crate::input::{Action, HitAreas};
use crate::keymap::Keymap;
use crate::surface::TerminalSurface;
use crate::theme::Theme;
use crate::transition::{TransitionAnimator, TransitionConfigExt};
use crate::widgets::{PopupWidget, SlideshowLayout, StatusBarWidget};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub slideshow: Slideshow,
    pub animator: TransitionAnimator,
    pub images: SlideImages,
    pub keymap: Keymap,
    pub theme: Theme,
    /// Deck name shown in the status bar
    pub title: String,
    pub mode: Mode,
    /// Clickable regions from the last draw
    pub hit_areas: HitAreas,
    /// Pointer is over the slideshow
    pub hovering: bool,
    /// Paused from the keyboard
    pub manual_pause: bool,
    /// Paused because the pointer is over the slideshow
    pub hover_pause: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Arc<AppConfig>, slideshow: Slideshow, theme: Theme, title: impl Into<String>) -> Self {
        Self {
            animator: TransitionAnimator::new(&config.slideshow),
            keymap: Keymap::from_config(&config.keymap),
            images: SlideImages::new(),
            config,
            slideshow,
            theme,
            title: title.into(),
            mode: Mode::Normal,
            hit_areas: HitAreas::default(),
            hovering: false,
            manual_pause: false,
            hover_pause: false,
            status_message: None,
            should_quit: false,
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn help_visible(&self) -> bool {
        self.mode == Mode::Help
    }

    /// Slideshow intent carried by a navigation action
    pub fn intent_for(&self, action: &Action) -> Option<Intent> {
        match action {
            Action::Next => Some(Intent::Next),
            Action::Previous => Some(Intent::Previous),
            Action::GoTo(index) => Some(Intent::GoTo(*index as i64)),
            Action::First => Some(Intent::GoTo(0)),
            Action::Last => Some(Intent::GoTo(self.slideshow.len().saturating_sub(1) as i64)),
            _ => None,
        }
    }

    /// Apply an input action
    pub fn apply(&mut self, action: Action) {
        if let Some(intent) = self.intent_for(&action) {
            if self.slideshow.dispatch(intent) {
                self.clear_status();
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePause => {
                self.manual_pause = !self.manual_pause;
                self.sync_pause();
                if self.manual_pause {
                    self.set_status("Paused");
                } else {
                    self.set_status("Playing");
                }
            }
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Normal => Mode::Help,
                    Mode::Help => Mode::Normal,
                };
            }
            Action::CloseHelp => self.mode = Mode::Normal,
            Action::HoverEnter => {
                self.hovering = true;
                if self.config.slideshow.pause_on_hover {
                    self.hover_pause = true;
                    self.sync_pause();
                }
            }
            Action::HoverLeave => {
                self.hovering = false;
                self.hover_pause = false;
                self.sync_pause();
            }
            _ => {}
        }
    }

    fn sync_pause(&mut self) {
        let intent = if self.manual_pause || self.hover_pause {
            Intent::Pause
        } else {
            Intent::Resume
        };
        debug!("Pause state: {:?}", intent);
        self.slideshow.dispatch(intent);
    }

    /// How long the event loop may wait before the next frame is due
    pub fn poll_timeout(&self, tick_rate: Duration, now: Instant) -> Duration {
        let mut timeout = tick_rate;
        if self.slideshow.is_transitioning() {
            timeout = timeout.min(self.config.slideshow.animation_tick_duration());
        }
        if let Some(deadline) = self.slideshow.next_autoplay_deadline() {
            timeout = timeout.min(deadline.saturating_duration_since(now));
        }
        timeout
    }

    /// Draw one frame and advance the slideshow by it
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = SlideshowLayout::compute(area, &self.config.ui, self.slideshow.len());

        frame.render_widget(Block::default().style(Style::default().bg(self.theme.bg0)), area);

        {
            let mut surface = TerminalSurface::new(
                frame,
                &layout,
                &mut self.animator,
                &mut self.images,
                &self.theme,
                &self.config.ui,
                self.slideshow.len(),
            );
            self.slideshow.render(&mut surface);
        }

        if let Some(status) = layout.status {
            StatusBarWidget::render(frame, status, self);
        }
        if self.mode == Mode::Help {
            PopupWidget::render_help(frame, &self.config.keymap, &self.theme);
        }

        self.hit_areas = layout.hit_areas();
    }
}

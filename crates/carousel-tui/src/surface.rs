//! Terminal implementation of the slideshow render surface

use ratatui::Frame;

use carousel_core::{config::UiConfig, RenderSurface, SlideshowView, SurfaceStatus};

use crate::images::SlideImages;
use crate::theme::Theme;
use crate::transition::{timing::offset_to_columns, TransitionAnimator};
use crate::widgets::{CarouselChrome, SlideshowLayout, TrackWidget};

/// Draws one slideshow frame into a ratatui [`Frame`]
///
/// Lives for a single draw call; the animator and image cache it borrows
/// carry state between frames.
pub struct TerminalSurface<'a, 'f> {
    frame: &'a mut Frame<'f>,
    layout: &'a SlideshowLayout,
    animator: &'a mut TransitionAnimator,
    images: &'a mut SlideImages,
    theme: &'a Theme,
    ui: &'a UiConfig,
    slide_count: usize,
}

impl<'a, 'f> TerminalSurface<'a, 'f> {
    pub fn new(
        frame: &'a mut Frame<'f>,
        layout: &'a SlideshowLayout,
        animator: &'a mut TransitionAnimator,
        images: &'a mut SlideImages,
        theme: &'a Theme,
        ui: &'a UiConfig,
        slide_count: usize,
    ) -> Self {
        Self {
            frame,
            layout,
            animator,
            images,
            theme,
            ui,
            slide_count,
        }
    }

    fn draw_chrome(&mut self, view: &SlideshowView<'_>) {
        // Inert while in flight or with nothing to move to
        let enabled = !view.is_transition() && self.slide_count > 1;
        CarouselChrome::render_arrows(self.frame, self.layout, enabled, self.theme);

        if self.ui.show_caption {
            if let (Some(area), Some(slide)) = (self.layout.caption, view.shown_slide()) {
                CarouselChrome::render_caption(self.frame, area, slide, self.theme);
            }
        }

        CarouselChrome::render_dots(self.frame, &self.layout.dots, view.shown_index(), self.theme);
    }
}

impl RenderSurface for TerminalSurface<'_, '_> {
    fn present(&mut self, view: &SlideshowView<'_>) -> SurfaceStatus {
        let sample = self.animator.sample(view);
        let track = self.layout.track;

        match *view {
            SlideshowView::Placeholder => {
                CarouselChrome::render_placeholder(self.frame, self.layout.stage, self.theme);
                return SurfaceStatus::Presented;
            }
            SlideshowView::Idle { slide, .. } => {
                let grid = self.images.grid_for(slide, track.width, track.height, self.theme);
                self.frame.render_widget(TrackWidget::single(&grid), track);
            }
            SlideshowView::Transition { .. } => {
                if let Some((left, right)) = view.track() {
                    let left = self.images.grid_for(left, track.width, track.height, self.theme);
                    let right = self.images.grid_for(right, track.width, track.height, self.theme);
                    let shift = offset_to_columns(sample.offset, track.width);
                    self.frame
                        .render_widget(TrackWidget::new(&left, &right, shift), track);
                }
            }
        }

        self.draw_chrome(view);

        if sample.finished {
            SurfaceStatus::TransitionFinished
        } else {
            SurfaceStatus::Presented
        }
    }
}

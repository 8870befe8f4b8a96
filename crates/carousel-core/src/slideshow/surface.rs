use crate::slide::Slide;

use super::state::{Direction, TransitionPhase};

/// What the render surface should draw this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowView<'a> {
    /// No slides; draw a placeholder
    Placeholder,
    /// Steady state: one slide
    Idle { index: usize, slide: &'a Slide },
    /// Two adjacent slides on a track
    Transition {
        from_index: usize,
        to_index: usize,
        from: &'a Slide,
        to: &'a Slide,
        direction: Direction,
        phase: TransitionPhase,
    },
}

impl<'a> SlideshowView<'a> {
    /// Left and right slide of the track, in visual order
    pub fn track(&self) -> Option<(&'a Slide, &'a Slide)> {
        match *self {
            SlideshowView::Transition {
                from, to, direction, ..
            } => Some(match direction {
                Direction::Forward => (from, to),
                Direction::Backward => (to, from),
            }),
            _ => None,
        }
    }

    /// Index highlighted by indicators: the pending slide while in flight
    pub fn shown_index(&self) -> Option<usize> {
        match *self {
            SlideshowView::Placeholder => None,
            SlideshowView::Idle { index, .. } => Some(index),
            SlideshowView::Transition { to_index, .. } => Some(to_index),
        }
    }

    /// Slide whose caption is shown
    pub fn shown_slide(&self) -> Option<&'a Slide> {
        match *self {
            SlideshowView::Placeholder => None,
            SlideshowView::Idle { slide, .. } => Some(slide),
            SlideshowView::Transition { to, .. } => Some(to),
        }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, SlideshowView::Transition { .. })
    }
}

/// Result of presenting one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceStatus {
    Presented,
    /// The slide animation reached its end position during this frame
    TransitionFinished,
}

/// Layer that draws slides and reports when a transition's animation ends
///
/// Implementations must return [`SurfaceStatus::TransitionFinished`] exactly
/// once per animating transition and never otherwise.
pub trait RenderSurface {
    fn present(&mut self, view: &SlideshowView<'_>) -> SurfaceStatus;
}

//! Transition animator
//!
//! Samples the slide track offset once per frame from the controller's view.
//! The animation clock starts on the first frame the view reports
//! `Animating`, so the armed frames always show the start position.

use std::time::{Duration, Instant};

use carousel_core::{Direction, SlideshowConfig, SlideshowView, TransitionPhase};

use super::config::TransitionConfigExt;
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete_at, lerp, progress_at};

/// Track position for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    /// Offset in percent of one slide width (0 = left slide fully visible, -100 = right slide)
    pub offset: f64,
    /// The animation reached its end on this frame
    pub finished: bool,
}

impl TrackSample {
    fn at(offset: f64) -> Self {
        Self {
            offset,
            finished: false,
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from_index: usize,
    to_index: usize,
    direction: Direction,
    duration: Duration,
    easing: EasingType,
    /// Completion already reported for this transition
    reported: bool,
}

impl ActiveAnimation {
    fn matches(&self, from_index: usize, to_index: usize, direction: Direction) -> bool {
        self.from_index == from_index && self.to_index == to_index && self.direction == direction
    }
}

#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    animation: Option<ActiveAnimation>,
    duration: Duration,
    easing: EasingType,
}

impl Default for TransitionAnimator {
    fn default() -> Self {
        Self::new(&SlideshowConfig::default())
    }
}

impl TransitionAnimator {
    pub fn new(config: &SlideshowConfig) -> Self {
        Self {
            animation: None,
            duration: config.transition_duration(),
            easing: config.easing,
        }
    }

    /// Whether a transition animation is running
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(|a| !a.reported)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Sample the track for the current frame
    pub fn sample(&mut self, view: &SlideshowView<'_>) -> TrackSample {
        self.sample_at(view, Instant::now())
    }

    /// Sample the track at an explicit instant
    pub fn sample_at(&mut self, view: &SlideshowView<'_>, now: Instant) -> TrackSample {
        let SlideshowView::Transition {
            from_index,
            to_index,
            direction,
            phase,
            ..
        } = *view
        else {
            self.animation = None;
            return TrackSample::at(0.0);
        };

        let (start_offset, end_offset) = direction.track_span();

        if phase == TransitionPhase::Armed {
            self.animation = None;
            return TrackSample::at(start_offset);
        }

        let fresh = !self
            .animation
            .as_ref()
            .is_some_and(|a| a.matches(from_index, to_index, direction));
        if fresh {
            self.animation = Some(ActiveAnimation {
                start: now,
                from_index,
                to_index,
                direction,
                duration: self.duration,
                easing: self.easing,
                reported: false,
            });
        }

        let Some(anim) = self.animation.as_mut() else {
            return TrackSample::at(start_offset);
        };

        if anim.reported {
            return TrackSample::at(end_offset);
        }

        if is_complete_at(anim.start, anim.duration, now) {
            anim.reported = true;
            return TrackSample {
                offset: end_offset,
                finished: true,
            };
        }

        let t = progress_at(anim.start, anim.duration, now);
        let eased = anim.easing.apply(t);
        TrackSample::at(lerp(start_offset, end_offset, eased))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::Slide;

    fn transition<'a>(
        a: &'a Slide,
        b: &'a Slide,
        direction: Direction,
        phase: TransitionPhase,
    ) -> SlideshowView<'a> {
        SlideshowView::Transition {
            from_index: 0,
            to_index: 1,
            from: a,
            to: b,
            direction,
            phase,
        }
    }

    fn linear() -> TransitionAnimator {
        TransitionAnimator::new(&SlideshowConfig {
            easing: EasingType::Linear,
            ..Default::default()
        })
    }

    #[test]
    fn test_idle_is_at_rest() {
        let slide = Slide::new("a.png");
        let mut animator = linear();
        let sample = animator.sample(&SlideshowView::Idle {
            index: 0,
            slide: &slide,
        });
        assert_eq!(sample, TrackSample::at(0.0));
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_armed_holds_start_offset() {
        let (a, b) = (Slide::new("a.png"), Slide::new("b.png"));
        let mut animator = linear();
        let now = Instant::now();

        let forward = transition(&a, &b, Direction::Forward, TransitionPhase::Armed);
        assert_eq!(animator.sample_at(&forward, now).offset, 0.0);

        let backward = transition(&a, &b, Direction::Backward, TransitionPhase::Armed);
        assert_eq!(animator.sample_at(&backward, now).offset, -100.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_forward_animation_reports_once() {
        let (a, b) = (Slide::new("a.png"), Slide::new("b.png"));
        let mut animator = linear();
        let view = transition(&a, &b, Direction::Forward, TransitionPhase::Animating);
        let start = Instant::now();

        let first = animator.sample_at(&view, start);
        assert_eq!(first, TrackSample::at(0.0));
        assert!(animator.is_animating());

        let mid = animator.sample_at(&view, start + Duration::from_millis(160));
        assert!((mid.offset + 50.0).abs() < 0.001);
        assert!(!mid.finished);

        let end = animator.sample_at(&view, start + Duration::from_millis(320));
        assert!(end.finished);
        assert_eq!(end.offset, -100.0);

        let after = animator.sample_at(&view, start + Duration::from_millis(400));
        assert!(!after.finished);
        assert_eq!(after.offset, -100.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_backward_animation_moves_right() {
        let (a, b) = (Slide::new("a.png"), Slide::new("b.png"));
        let mut animator = linear();
        let view = transition(&a, &b, Direction::Backward, TransitionPhase::Animating);
        let start = Instant::now();

        assert_eq!(animator.sample_at(&view, start).offset, -100.0);
        let mid = animator.sample_at(&view, start + Duration::from_millis(80));
        assert!((mid.offset + 75.0).abs() < 0.001);
        let end = animator.sample_at(&view, start + Duration::from_millis(320));
        assert!(end.finished);
        assert_eq!(end.offset, 0.0);
    }

    #[test]
    fn test_new_transition_restarts_clock() {
        let (a, b) = (Slide::new("a.png"), Slide::new("b.png"));
        let mut animator = linear();
        let start = Instant::now();

        let view = transition(&a, &b, Direction::Forward, TransitionPhase::Animating);
        animator.sample_at(&view, start);
        assert!(animator.sample_at(&view, start + Duration::from_millis(320)).finished);

        // Back to idle, then the next transition starts from scratch
        animator.sample_at(&SlideshowView::Idle { index: 1, slide: &b }, start);
        let later = start + Duration::from_secs(10);
        let sample = animator.sample_at(&view, later);
        assert_eq!(sample, TrackSample::at(0.0));
    }

    #[test]
    fn test_zero_duration_finishes_on_first_animating_frame() {
        let (a, b) = (Slide::new("a.png"), Slide::new("b.png"));
        let mut animator = TransitionAnimator::new(&SlideshowConfig {
            transition_duration_ms: 0,
            ..Default::default()
        });
        let view = transition(&a, &b, Direction::Forward, TransitionPhase::Animating);
        let sample = animator.sample(&view);
        assert!(sample.finished);
        assert_eq!(sample.offset, -100.0);
    }
}

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::SlideshowConfig;
use crate::slide::Slide;

use super::autoplay::{AutoplayTimer, Schedule};
use super::intent::Intent;
use super::state::{Direction, Phase, TransitionPhase};
use super::surface::{RenderSurface, SlideshowView, SurfaceStatus};

/// Construction options for a [`Slideshow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowOptions {
    pub autoplay: bool,
    pub autoplay_interval: Duration,
    /// Frames presented in the starting layout before the animation is enabled (min 1)
    pub settle_frames: u8,
}

impl Default for SlideshowOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval: Duration::from_millis(6500),
            settle_frames: 2,
        }
    }
}

impl From<&SlideshowConfig> for SlideshowOptions {
    fn from(config: &SlideshowConfig) -> Self {
        Self {
            autoplay: config.autoplay,
            autoplay_interval: Duration::from_millis(config.autoplay_interval_ms),
            settle_frames: config.settle_frames,
        }
    }
}

/// Looping slideshow state machine
///
/// Navigation requests made while a transition is in flight are rejected, not
/// queued. The committed index only moves in
/// [`on_transition_visually_complete`](Self::on_transition_visually_complete).
pub struct Slideshow {
    slides: Vec<Slide>,
    current: usize,
    phase: Phase,
    paused: bool,
    autoplay: bool,
    interval: Duration,
    settle_frames: u8,
    timer: AutoplayTimer,
    clock: Box<dyn Clock>,
    torn_down: bool,
}

impl Slideshow {
    /// Create a slideshow driven by the wall clock
    pub fn new(slides: Vec<Slide>, options: SlideshowOptions) -> Self {
        Self::with_clock(slides, options, SystemClock)
    }

    /// Create a slideshow with an explicit time source
    pub fn with_clock(
        slides: Vec<Slide>,
        options: SlideshowOptions,
        clock: impl Clock + 'static,
    ) -> Self {
        let slides: Vec<Slide> = slides.into_iter().filter(Slide::has_image).collect();

        let mut show = Self {
            slides,
            current: 0,
            phase: Phase::Idle,
            paused: false,
            autoplay: options.autoplay,
            interval: options.autoplay_interval,
            settle_frames: options.settle_frames.max(1),
            timer: AutoplayTimer::new(),
            clock: Box::new(clock),
            torn_down: false,
        };
        info!(
            "Slideshow created with {} slides (autoplay: {}, interval: {:?})",
            show.slides.len(),
            show.autoplay,
            show.interval
        );
        show.sync_autoplay();
        show
    }

    // Accessors

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Committed steady-state index
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    /// Target of the in-flight transition
    pub fn pending_index(&self) -> Option<usize> {
        self.phase.pending().map(|(target, _)| target)
    }

    pub fn pending_slide(&self) -> Option<&Slide> {
        self.pending_index().and_then(|i| self.slides.get(i))
    }

    /// Direction of the in-flight transition
    pub fn direction(&self) -> Option<Direction> {
        self.phase.pending().map(|(_, direction)| direction)
    }

    pub fn transition_phase(&self) -> Option<TransitionPhase> {
        match self.phase {
            Phase::Idle => None,
            Phase::Armed { .. } => Some(TransitionPhase::Armed),
            Phase::Animating { .. } => Some(TransitionPhase::Animating),
        }
    }

    /// Whether a transition is in flight; controls should be disabled while true
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Index indicators should highlight: pending while in flight, else current
    pub fn shown_index(&self) -> usize {
        self.pending_index().unwrap_or(self.current)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    pub fn autoplay_interval(&self) -> Duration {
        self.interval
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// When autoplay will next advance, if a timer is running
    pub fn next_autoplay_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    // Navigation

    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    pub fn previous(&mut self) -> bool {
        self.step(-1)
    }

    /// Jump to slide `index`, wrapped into range (negative values count from the end)
    pub fn go_to(&mut self, index: i64) -> bool {
        if !self.accepts_navigation() {
            return false;
        }
        let target = wrap_index(index, self.slides.len());
        if target == self.current {
            return false;
        }
        self.begin_transition(target)
    }

    fn step(&mut self, delta: i64) -> bool {
        if !self.accepts_navigation() {
            return false;
        }
        let target = wrap_index(self.current as i64 + delta, self.slides.len());
        self.begin_transition(target)
    }

    fn accepts_navigation(&self) -> bool {
        if self.torn_down || self.slides.is_empty() {
            return false;
        }
        if self.is_transitioning() {
            debug!("Navigation rejected: transition in flight");
            return false;
        }
        true
    }

    fn begin_transition(&mut self, target: usize) -> bool {
        // A single slide never transitions to itself
        if target == self.current {
            return false;
        }

        let direction = Direction::between(self.current, target);
        self.phase = Phase::Armed {
            target,
            direction,
            frames_left: self.settle_frames,
        };
        debug!(
            "Transition armed: {} -> {} ({:?})",
            self.current, target, direction
        );
        self.sync_autoplay();
        true
    }

    /// Count one presented frame; enables the animation once the starting
    /// layout has been on screen for `settle_frames` frames
    ///
    /// Returns `true` when the transition switched to animating.
    pub fn on_frame(&mut self) -> bool {
        let Phase::Armed {
            target,
            direction,
            frames_left,
        } = self.phase
        else {
            return false;
        };

        if frames_left > 1 {
            self.phase = Phase::Armed {
                target,
                direction,
                frames_left: frames_left - 1,
            };
            return false;
        }

        self.phase = Phase::Animating { target, direction };
        debug!("Transition animating towards {}", target);
        true
    }

    /// Commit the pending slide; called by the render surface when its animation ends
    ///
    /// Ignored while idle.
    pub fn on_transition_visually_complete(&mut self) -> bool {
        let Some((target, _)) = self.phase.pending() else {
            debug!("Completion signal ignored: no transition in flight");
            return false;
        };

        self.current = target;
        self.phase = Phase::Idle;
        debug!("Transition committed: now at {}", self.current);
        self.sync_autoplay();
        true
    }

    // Autoplay

    /// Suspend or resume autoplay; an in-flight transition is left alone
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        debug!("Slideshow {}", if paused { "paused" } else { "resumed" });
        self.sync_autoplay();
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.paused);
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        if self.autoplay == enabled {
            return;
        }
        self.autoplay = enabled;
        self.sync_autoplay();
    }

    /// Change the autoplay period; a zero interval stops autoplay
    pub fn set_autoplay_interval(&mut self, interval: Duration) {
        if self.interval == interval {
            return;
        }
        self.interval = interval;
        self.sync_autoplay();
    }

    /// Advance if the autoplay deadline has passed
    ///
    /// Returns `true` if a transition was started.
    pub fn poll_autoplay(&mut self) -> bool {
        if self.torn_down || !self.timer.is_armed() {
            return false;
        }
        let now = self.clock.now();
        if !self.timer.fire_if_due(now) {
            return false;
        }
        debug!("Autoplay advancing from {}", self.current);
        self.next()
    }

    fn desired_schedule(&self) -> Option<Schedule> {
        let running = !self.torn_down
            && self.autoplay
            && !self.paused
            && !self.is_transitioning()
            && self.slides.len() > 1;

        running.then_some(Schedule {
            interval: self.interval,
            slide_count: self.slides.len(),
            anchor_index: self.current,
        })
    }

    fn sync_autoplay(&mut self) {
        let desired = self.desired_schedule();
        let now = self.clock.now();
        self.timer.reconcile(desired, now);
    }

    // Input

    /// Apply an intent from an input source
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let applied = match intent {
            Intent::Previous => self.previous(),
            Intent::Next => self.next(),
            Intent::GoTo(index) => self.go_to(index),
            Intent::Pause => {
                self.set_paused(true);
                true
            }
            Intent::Resume => {
                self.set_paused(false);
                true
            }
        };
        if intent.is_navigation() && !applied {
            debug!("Ignored {:?} at slide {}", intent, self.current);
        }
        applied
    }

    // Rendering

    /// Snapshot of what should be on screen
    pub fn view(&self) -> SlideshowView<'_> {
        if self.slides.is_empty() {
            return SlideshowView::Placeholder;
        }

        let from = &self.slides[self.current];
        match self.phase {
            Phase::Idle => SlideshowView::Idle {
                index: self.current,
                slide: from,
            },
            Phase::Armed {
                target, direction, ..
            } => SlideshowView::Transition {
                from_index: self.current,
                to_index: target,
                from,
                to: &self.slides[target],
                direction,
                phase: TransitionPhase::Armed,
            },
            Phase::Animating { target, direction } => SlideshowView::Transition {
                from_index: self.current,
                to_index: target,
                from,
                to: &self.slides[target],
                direction,
                phase: TransitionPhase::Animating,
            },
        }
    }

    /// Present one frame on `surface`
    ///
    /// The frame is counted after it is presented, so the starting layout is
    /// always drawn at least once before the animation is enabled.
    pub fn render<S>(&mut self, surface: &mut S) -> SurfaceStatus
    where
        S: RenderSurface + ?Sized,
    {
        let status = surface.present(&self.view());
        match status {
            SurfaceStatus::TransitionFinished => {
                if !self.on_transition_visually_complete() {
                    warn!("Render surface reported a finished transition while idle");
                }
            }
            SurfaceStatus::Presented => {
                self.on_frame();
            }
        }
        status
    }

    /// Release the autoplay timer; the slideshow ignores all requests afterwards
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.timer.cancel();
        info!("Slideshow torn down at slide {}", self.current);
    }
}

impl Drop for Slideshow {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Wrap any integer into `[0, len)`; `len` must be non-zero
fn wrap_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("slide-{}.jpg", i)).with_label(format!("Slide {}", i)))
            .collect()
    }

    fn manual(n: usize, options: SlideshowOptions) -> (Slideshow, ManualClock) {
        let clock = ManualClock::new();
        let show = Slideshow::with_clock(slides(n), options, clock.clone());
        (show, clock)
    }

    fn no_autoplay() -> SlideshowOptions {
        SlideshowOptions {
            autoplay: false,
            ..Default::default()
        }
    }

    /// Surface that finishes a transition after a fixed number of animating frames
    struct ScriptedSurface {
        animating_frames: usize,
        seen: Vec<Option<TransitionPhase>>,
        finished: usize,
    }

    impl ScriptedSurface {
        fn new(animating_frames: usize) -> Self {
            Self {
                animating_frames,
                seen: Vec::new(),
                finished: 0,
            }
        }
    }

    impl RenderSurface for ScriptedSurface {
        fn present(&mut self, view: &SlideshowView<'_>) -> SurfaceStatus {
            let phase = match view {
                SlideshowView::Transition { phase, .. } => Some(*phase),
                _ => None,
            };
            self.seen.push(phase);
            let animated = self
                .seen
                .iter()
                .rev()
                .take_while(|p| **p == Some(TransitionPhase::Animating))
                .count();
            if phase == Some(TransitionPhase::Animating) && animated == self.animating_frames {
                self.finished += 1;
                SurfaceStatus::TransitionFinished
            } else {
                SurfaceStatus::Presented
            }
        }
    }

    fn commit(show: &mut Slideshow) {
        assert!(show.on_transition_visually_complete());
    }

    #[test]
    fn test_initial_state() {
        let (show, _) = manual(3, no_autoplay());
        assert_eq!(show.current_index(), 0);
        assert_eq!(show.pending_index(), None);
        assert!(!show.is_transitioning());
        assert!(!show.is_paused());
    }

    #[test]
    fn test_next_then_commit_scenario() {
        let (mut show, _) = manual(3, no_autoplay());

        assert!(show.next());
        assert_eq!(show.pending_index(), Some(1));
        assert_eq!(show.direction(), Some(Direction::Forward));
        assert_eq!(show.current_index(), 0);
        assert_eq!(show.pending_slide(), show.slides().get(1));

        commit(&mut show);
        assert_eq!(show.current_index(), 1);
        assert_eq!(show.pending_index(), None);
        assert_eq!(show.pending_slide(), None);
        assert_eq!(show.direction(), None);
    }

    #[test]
    fn test_go_to_then_wrap_scenario() {
        let (mut show, _) = manual(3, no_autoplay());

        assert!(show.go_to(2));
        assert_eq!(show.pending_index(), Some(2));
        assert_eq!(show.direction(), Some(Direction::Forward));
        commit(&mut show);
        assert_eq!(show.current_index(), 2);

        assert!(show.next());
        assert_eq!(show.pending_index(), Some(0));
        // Numeric comparison: 0 < 2 animates backward
        assert_eq!(show.direction(), Some(Direction::Backward));
    }

    #[test]
    fn test_next_n_times_lands_on_n_mod_len() {
        for len in 1..=5 {
            for n in 0..12 {
                let (mut show, _) = manual(len, no_autoplay());
                for _ in 0..n {
                    if show.next() {
                        commit(&mut show);
                    }
                }
                assert_eq!(show.current_index(), n % len, "len={} n={}", len, n);
            }
        }
    }

    #[test]
    fn test_previous_wraps_backward() {
        for len in 2..=6 {
            let (mut show, _) = manual(len, no_autoplay());
            assert!(show.previous());
            assert_eq!(show.pending_index(), Some(len - 1));
            commit(&mut show);
            assert_eq!(show.current_index(), len - 1);
        }
    }

    #[test]
    fn test_go_to_normalizes_any_integer() {
        let len = 4usize;
        for i in -9i64..=9 {
            let (mut show, _) = manual(len, no_autoplay());
            let expected = (((i % len as i64) + len as i64) % len as i64) as usize;
            let started = show.go_to(i);
            assert_eq!(started, expected != 0, "i={}", i);
            if started {
                commit(&mut show);
            }
            assert_eq!(show.current_index(), expected, "i={}", i);
        }
    }

    #[test]
    fn test_go_to_current_is_noop() {
        let (mut show, _) = manual(3, no_autoplay());
        assert!(!show.go_to(0));
        assert!(!show.go_to(3));
        assert!(!show.is_transitioning());
    }

    #[test]
    fn test_navigation_rejected_while_in_flight() {
        let (mut show, _) = manual(4, no_autoplay());
        assert!(show.next());

        assert!(!show.next());
        assert!(!show.previous());
        assert!(!show.go_to(3));
        assert_eq!(show.pending_index(), Some(1));
        assert_eq!(show.direction(), Some(Direction::Forward));
        assert_eq!(show.current_index(), 0);

        // Still rejected once animating
        show.on_frame();
        show.on_frame();
        assert_eq!(show.transition_phase(), Some(TransitionPhase::Animating));
        assert!(!show.go_to(2));
        assert_eq!(show.pending_index(), Some(1));

        // Not queued: the first request after commit is the one that counts
        commit(&mut show);
        assert_eq!(show.current_index(), 1);
        assert!(!show.is_transitioning());
    }

    #[test]
    fn test_single_slide_never_transitions() {
        let (mut show, clock) = manual(1, SlideshowOptions::default());
        assert!(!show.next());
        assert!(!show.previous());
        assert!(!show.go_to(5));
        assert!(show.next_autoplay_deadline().is_none());

        clock.advance(Duration::from_secs(60));
        assert!(!show.poll_autoplay());
        assert_eq!(show.current_index(), 0);
    }

    #[test]
    fn test_empty_slideshow_is_inert() {
        let (mut show, clock) = manual(0, SlideshowOptions::default());
        assert!(!show.next());
        assert!(!show.previous());
        assert!(!show.go_to(-3));
        assert!(!show.on_transition_visually_complete());
        assert!(!show.on_frame());
        show.set_paused(true);
        show.set_paused(false);
        clock.advance(Duration::from_secs(60));
        assert!(!show.poll_autoplay());
        assert_eq!(show.view(), SlideshowView::Placeholder);
        assert!(show.current_slide().is_none());

        let mut surface = ScriptedSurface::new(1);
        assert_eq!(show.render(&mut surface), SurfaceStatus::Presented);
    }

    #[test]
    fn test_slides_without_image_are_filtered() {
        let mut list = slides(2);
        list.insert(1, Slide::new(""));
        let show = Slideshow::with_clock(list, no_autoplay(), ManualClock::new());
        assert_eq!(show.len(), 2);
    }

    #[test]
    fn test_armed_waits_for_settle_frames() {
        let options = SlideshowOptions {
            settle_frames: 3,
            ..no_autoplay()
        };
        let (mut show, _) = manual(3, options);
        show.next();

        assert!(!show.on_frame());
        assert!(!show.on_frame());
        assert_eq!(show.transition_phase(), Some(TransitionPhase::Armed));
        assert!(show.on_frame());
        assert_eq!(show.transition_phase(), Some(TransitionPhase::Animating));
        assert!(!show.on_frame());
    }

    #[test]
    fn test_zero_settle_frames_clamped_to_one() {
        let options = SlideshowOptions {
            settle_frames: 0,
            ..no_autoplay()
        };
        let (mut show, _) = manual(2, options);
        let mut surface = ScriptedSurface::new(2);

        show.next();
        show.render(&mut surface);
        assert_eq!(surface.seen[0], Some(TransitionPhase::Armed));
        assert_eq!(show.transition_phase(), Some(TransitionPhase::Animating));
    }

    #[test]
    fn test_render_places_then_animates_then_commits() {
        let (mut show, _) = manual(3, no_autoplay());
        let mut surface = ScriptedSurface::new(3);

        show.render(&mut surface);
        show.next();
        for _ in 0..6 {
            show.render(&mut surface);
        }

        assert_eq!(
            surface.seen,
            vec![
                None,
                Some(TransitionPhase::Armed),
                Some(TransitionPhase::Armed),
                Some(TransitionPhase::Animating),
                Some(TransitionPhase::Animating),
                Some(TransitionPhase::Animating),
                None,
            ]
        );
        assert_eq!(surface.finished, 1);
        assert_eq!(show.current_index(), 1);
    }

    #[test]
    fn test_current_only_changes_on_completion() {
        let (mut show, _) = manual(3, no_autoplay());
        show.next();
        show.on_frame();
        show.on_frame();
        show.set_paused(true);
        assert_eq!(show.current_index(), 0);
        commit(&mut show);
        assert_eq!(show.current_index(), 1);
        assert!(!show.on_transition_visually_complete());
        assert_eq!(show.current_index(), 1);
    }

    #[test]
    fn test_view_track_order() {
        let (mut show, _) = manual(3, no_autoplay());
        show.next();
        let view = show.view();
        let (left, right) = view.track().unwrap();
        assert_eq!(left.label(), "Slide 0");
        assert_eq!(right.label(), "Slide 1");
        assert_eq!(view.shown_index(), Some(1));
        commit(&mut show);

        show.previous();
        let view = show.view();
        let (left, right) = view.track().unwrap();
        assert_eq!(left.label(), "Slide 0");
        assert_eq!(right.label(), "Slide 1");
        assert_eq!(view.shown_slide().unwrap().label(), "Slide 0");
    }

    #[test]
    fn test_autoplay_advances_after_interval() {
        let (mut show, clock) = manual(3, SlideshowOptions::default());

        clock.advance(Duration::from_millis(6499));
        assert!(!show.poll_autoplay());
        clock.advance(Duration::from_millis(1));
        assert!(show.poll_autoplay());
        assert_eq!(show.pending_index(), Some(1));

        // No timer while in flight
        assert!(show.next_autoplay_deadline().is_none());
        clock.advance(Duration::from_secs(30));
        assert!(!show.poll_autoplay());
    }

    #[test]
    fn test_autoplay_rearms_from_commit() {
        let (mut show, clock) = manual(3, SlideshowOptions::default());
        clock.advance(Duration::from_millis(6500));
        show.poll_autoplay();

        clock.advance(Duration::from_millis(320));
        commit(&mut show);
        assert_eq!(
            show.next_autoplay_deadline(),
            Some(clock.now() + Duration::from_millis(6500))
        );

        clock.advance(Duration::from_millis(6499));
        assert!(!show.poll_autoplay());
        clock.advance(Duration::from_millis(1));
        assert!(show.poll_autoplay());
        assert_eq!(show.pending_index(), Some(2));
    }

    #[test]
    fn test_paused_blocks_autoplay() {
        let (mut show, clock) = manual(3, SlideshowOptions::default());
        show.set_paused(true);
        assert!(show.next_autoplay_deadline().is_none());

        clock.advance(Duration::from_secs(3600));
        assert!(!show.poll_autoplay());
        assert_eq!(show.current_index(), 0);
        assert!(!show.is_transitioning());

        // Manual navigation still works while paused
        assert!(show.next());
    }

    #[test]
    fn test_resume_restarts_full_interval() {
        let (mut show, clock) = manual(3, SlideshowOptions::default());
        clock.advance(Duration::from_millis(6000));
        show.set_paused(true);
        clock.advance(Duration::from_millis(1000));
        show.set_paused(false);

        clock.advance(Duration::from_millis(6000));
        assert!(!show.poll_autoplay());
        clock.advance(Duration::from_millis(500));
        assert!(show.poll_autoplay());
    }

    #[test]
    fn test_pause_keeps_in_flight_transition() {
        let (mut show, _) = manual(3, no_autoplay());
        show.next();
        show.dispatch(Intent::Pause);
        assert!(show.is_paused());
        assert_eq!(show.pending_index(), Some(1));
        show.dispatch(Intent::Resume);
        assert!(!show.is_paused());
        assert_eq!(show.pending_index(), Some(1));
        show.toggle_paused();
        assert!(show.is_paused());
    }

    #[test]
    fn test_interval_change_rearms() {
        let (mut show, clock) = manual(3, SlideshowOptions::default());
        clock.advance(Duration::from_millis(5000));
        show.set_autoplay_interval(Duration::from_millis(1000));
        assert_eq!(
            show.next_autoplay_deadline(),
            Some(clock.now() + Duration::from_millis(1000))
        );

        show.set_autoplay_interval(Duration::ZERO);
        assert!(show.next_autoplay_deadline().is_none());
    }

    #[test]
    fn test_autoplay_toggle() {
        let (mut show, clock) = manual(3, no_autoplay());
        assert!(show.next_autoplay_deadline().is_none());

        show.set_autoplay(true);
        clock.advance(Duration::from_millis(6500));
        assert!(show.poll_autoplay());
    }

    #[test]
    fn test_dispatch_intents() {
        let (mut show, _) = manual(5, no_autoplay());
        assert!(show.dispatch(Intent::GoTo(-1)));
        assert_eq!(show.pending_index(), Some(4));
        assert!(!show.dispatch(Intent::Next));
        commit(&mut show);

        assert!(show.dispatch(Intent::Previous));
        assert_eq!(show.pending_index(), Some(3));
        assert!(Intent::GoTo(1).is_navigation());
        assert!(!Intent::Pause.is_navigation());
    }

    #[test]
    fn test_teardown_cancels_timer_and_ignores_requests() {
        let (mut show, clock) = manual(3, SlideshowOptions::default());
        assert!(show.next_autoplay_deadline().is_some());

        show.teardown();
        assert!(show.is_torn_down());
        assert!(show.next_autoplay_deadline().is_none());

        clock.advance(Duration::from_secs(60));
        assert!(!show.poll_autoplay());
        assert!(!show.next());
        show.set_paused(false);
        assert!(show.next_autoplay_deadline().is_none());
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(-1, 3), 2);
        assert_eq!(wrap_index(-4, 3), 2);
        assert_eq!(wrap_index(7, 3), 1);
        assert_eq!(wrap_index(0, 1), 0);
    }
}

//! Duration and frame-rate accessors for the transition settings

use std::time::Duration;

pub use carousel_core::SlideshowConfig;

pub trait TransitionConfigExt {
    /// Length of one slide animation
    fn transition_duration(&self) -> Duration;

    /// Frame interval while a transition is in flight
    fn animation_tick_duration(&self) -> Duration;
}

impl TransitionConfigExt for SlideshowConfig {
    #[inline]
    fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis((1000 / self.animation_fps as u64).max(1))
        }
    }
}

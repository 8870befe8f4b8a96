//! Slide transition animation
//!
//! The controller decides *when* a transition animates; this module decides
//! *where* the track is on each frame and tells the surface when the
//! animation has reached its end.
//!
//! - `easing` - pure easing curves
//! - `timing` - progress and interpolation helpers
//! - `config` - duration and frame-rate accessors on the slideshow config
//! - `animation` - per-frame track offset sampling

pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::{TrackSample, TransitionAnimator};
pub use config::TransitionConfigExt;
pub use easing::{EasingType, EasingTypeExt};

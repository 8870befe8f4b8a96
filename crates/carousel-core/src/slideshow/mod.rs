//! Looping slideshow controller
//!
//! The controller owns an immutable slide list and drives one transition at a
//! time through `Idle -> Armed -> Animating -> Idle`. It never draws anything
//! itself: a [`RenderSurface`] presents each [`SlideshowView`] and reports when
//! the slide animation has finished, which is the only point where the
//! committed index advances.
//!
//! ```ignore
//! use carousel_core::{Slide, Slideshow, SlideshowOptions};
//!
//! let mut show = Slideshow::new(slides, SlideshowOptions::default());
//!
//! // In the host loop
//! show.poll_autoplay();
//! show.render(&mut surface);
//! ```

mod autoplay;
mod controller;
mod intent;
mod state;
mod surface;

pub use autoplay::{AutoplayTimer, Schedule};
pub use controller::{Slideshow, SlideshowOptions};
pub use intent::Intent;
pub use state::{Direction, TransitionPhase};
pub use surface::{RenderSurface, SlideshowView, SurfaceStatus};

pub mod clock;
pub mod config;
pub mod deck;
pub mod error;
pub mod slide;
pub mod slideshow;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, EasingType, SlideshowConfig};
pub use deck::Deck;
pub use error::{Error, Result};
pub use slide::Slide;
pub use slideshow::{
    Direction, Intent, RenderSurface, Slideshow, SlideshowOptions, SlideshowView, SurfaceStatus,
    TransitionPhase,
};

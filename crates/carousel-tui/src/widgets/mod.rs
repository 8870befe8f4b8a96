mod carousel;
mod popup;
mod status_bar;
mod track;

pub use carousel::{CarouselChrome, SlideshowLayout};
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
pub use track::{track_column, Pane, TrackWidget};

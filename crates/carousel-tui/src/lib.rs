pub mod app;
pub mod event;
pub mod images;
pub mod input;
pub mod keymap;
pub mod surface;
pub mod terminal;
pub mod theme;
pub mod themes;
pub mod transition;
pub mod widgets;

pub use app::App;
pub use surface::TerminalSurface;
pub use terminal::TerminalSession;
pub use theme::Theme;
pub use themes::{available_themes, load_theme};

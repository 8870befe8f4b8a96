use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::keymap::Keymap;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Previous,
    /// Dot click
    GoTo(usize),
    First,
    Last,
    TogglePause,
    ToggleHelp,
    CloseHelp,
    /// Pointer entered the slideshow
    HoverEnter,
    /// Pointer left the slideshow
    HoverLeave,
    None,
}

/// Clickable regions recorded by the last draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    /// Whole slideshow (track + dots); hover here pauses autoplay
    pub stage: Rect,
    pub previous: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
}

impl HitAreas {
    fn dot_at(&self, pos: Position) -> Option<usize> {
        self.dots.iter().position(|dot| dot.contains(pos))
    }
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap, help_visible: bool) -> Action {
    let action = keymap.action_for(&key).cloned().unwrap_or(Action::None);

    if help_visible {
        // Any other key closes help; quit and slide stepping stay global
        return match action {
            Action::Quit | Action::Next | Action::Previous => action,
            _ => Action::CloseHelp,
        };
    }

    match action {
        Action::CloseHelp => Action::None,
        other => other,
    }
}

/// Handle a mouse event against the hit areas of the last frame
///
/// `hovering` is whether the pointer was over the stage before this event.
pub fn handle_mouse_event(mouse: MouseEvent, areas: &HitAreas, hovering: bool) -> Action {
    let pos = Position::new(mouse.column, mouse.row);
    let inside = areas.stage.contains(pos);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if areas.previous.contains(pos) {
                Action::Previous
            } else if areas.next.contains(pos) {
                Action::Next
            } else if let Some(index) = areas.dot_at(pos) {
                Action::GoTo(index)
            } else {
                hover_change(inside, hovering)
            }
        }
        MouseEventKind::ScrollDown if inside => Action::Next,
        MouseEventKind::ScrollUp if inside => Action::Previous,
        MouseEventKind::Moved | MouseEventKind::Drag(_) => hover_change(inside, hovering),
        _ => Action::None,
    }
}

/// The terminal lost focus; the pointer can leave through an edge without
/// any further mouse event, so treat it as leaving the stage
pub fn handle_focus_lost(hovering: bool) -> Action {
    hover_change(false, hovering)
}

fn hover_change(inside: bool, hovering: bool) -> Action {
    match (inside, hovering) {
        (true, false) => Action::HoverEnter,
        (false, true) => Action::HoverLeave,
        _ => Action::None,
    }
}

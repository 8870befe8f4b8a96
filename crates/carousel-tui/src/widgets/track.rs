use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::images::CellGrid;

/// Which slide of the track a screen column shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Left,
    Right,
}

/// Map a screen column to (pane, column in that pane) for a track shifted
/// `shift` columns to the left
#[inline]
pub fn track_column(x: u16, shift: u16, width: u16) -> (Pane, u16) {
    let source = x as u32 + shift.min(width) as u32;
    if source < width as u32 {
        (Pane::Left, source as u16)
    } else {
        (Pane::Right, (source - width as u32) as u16)
    }
}

/// Two slides side by side, viewed through a window one slide wide
///
/// A single slide is drawn by passing the same grid for both panes with no shift.
pub struct TrackWidget<'a> {
    left: &'a CellGrid,
    right: &'a CellGrid,
    shift: u16,
}

impl<'a> TrackWidget<'a> {
    pub fn new(left: &'a CellGrid, right: &'a CellGrid, shift: u16) -> Self {
        Self { left, right, shift }
    }

    pub fn single(grid: &'a CellGrid) -> Self {
        Self::new(grid, grid, 0)
    }
}

impl Widget for TrackWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        for y in 0..area.height {
            for x in 0..area.width {
                let (pane, col) = track_column(x, self.shift, area.width);
                let grid = match pane {
                    Pane::Left => self.left,
                    Pane::Right => self.right,
                };
                let Some(src) = grid.get(col, y) else {
                    continue;
                };
                if src.continuation {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_char(src.symbol).set_fg(src.fg).set_bg(src.bg);
                }
            }
        }
    }
}

//! Slide image cache and half-block rasterizer
//!
//! Images decode on tokio's blocking pool and come back over a channel. Each
//! decoded image is rasterized once per track size into a [`CellGrid`] of
//! half-block cells: two vertical pixels per terminal cell, top pixel in the
//! foreground of `▀`, bottom pixel in the background.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{imageops::FilterType, DynamicImage};
use ratatui::style::Color;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use carousel_core::Slide;

use crate::event::ImageLoadResult;
use crate::theme::Theme;

const UPPER_HALF: char = '▀';

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
    /// Right half of a wide character drawn by the cell before it
    pub continuation: bool,
}

impl GridCell {
    fn blank(bg: Color) -> Self {
        Self {
            symbol: ' ',
            fg: bg,
            bg,
            continuation: false,
        }
    }
}

/// Rectangular block of pre-rendered cells
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<GridCell>,
}

impl CellGrid {
    pub fn filled(width: u16, height: u16, bg: Color) -> Self {
        Self {
            width,
            height,
            cells: vec![GridCell::blank(bg); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&GridCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    fn set(&mut self, x: u16, y: u16, cell: GridCell) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = cell;
        }
    }

    /// Write a single line of text starting at `x`, clipped to the grid
    fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Color, bg: Color) {
        let mut col = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if col + w > self.width {
                break;
            }
            self.set(col, y, GridCell { symbol: ch, fg, bg, continuation: false });
            for extra in 1..w {
                self.set(col + extra, y, GridCell { symbol: ' ', fg, bg, continuation: true });
            }
            col += w;
        }
    }
}

/// Rasterize an image to cover `width` x `height` cells, cropping the overflow
pub fn rasterize(image: &DynamicImage, width: u16, height: u16) -> CellGrid {
    let mut grid = CellGrid::filled(width, height, Color::Reset);
    if width == 0 || height == 0 {
        return grid;
    }

    let px_w = width as u32;
    let px_h = height as u32 * 2;
    let rgba = image.resize_to_fill(px_w, px_h, FilterType::Triangle).to_rgba8();

    for row in 0..height {
        let y = row as u32 * 2;
        for x in 0..width {
            let top = rgba.get_pixel(x as u32, y);
            let bottom = rgba.get_pixel(x as u32, (y + 1).min(px_h - 1));
            grid.set(
                x,
                row,
                GridCell {
                    symbol: UPPER_HALF,
                    fg: Color::Rgb(top[0], top[1], top[2]),
                    bg: Color::Rgb(bottom[0], bottom[1], bottom[2]),
                    continuation: false,
                },
            );
        }
    }
    grid
}

/// Greedy word wrap by display width; words longer than a line are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if line_width > 0 && line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
            continue;
        }
        if line_width > 0 {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
            continue;
        }
        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if line_width + w > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(ch);
            line_width += w;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Panel showing a slide's alt text, used until (or instead of) its image
pub fn text_panel(width: u16, height: u16, text: &str, hint: Option<&str>, theme: &Theme) -> CellGrid {
    let mut grid = CellGrid::filled(width, height, theme.bg1);
    let inner = width.saturating_sub(4) as usize;
    let mut lines = wrap_text(text, inner);
    let hint_rows = usize::from(hint.is_some()) * 2;
    lines.truncate((height as usize).saturating_sub(hint_rows));

    let block = (lines.len() + hint_rows) as u16;
    let top = height.saturating_sub(block) / 2;

    for (i, line) in lines.iter().enumerate() {
        let x = width.saturating_sub(line.width() as u16) / 2;
        grid.put_str(x, top + i as u16, line, theme.fg1, theme.bg1);
    }
    if let Some(hint) = hint {
        let y = top + lines.len() as u16 + 1;
        let x = width.saturating_sub(hint.width() as u16) / 2;
        grid.put_str(x, y, hint, theme.muted, theme.bg1);
    }
    grid
}

#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(Arc<DynamicImage>),
    Failed(String),
}

/// Decoded slide images and their rasterized grids
#[derive(Default)]
pub struct SlideImages {
    states: HashMap<PathBuf, ImageState>,
    grids: HashMap<PathBuf, Arc<CellGrid>>,
    grid_size: (u16, u16),
}

impl SlideImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, path: &Path) -> Option<&ImageState> {
        self.states.get(path)
    }

    /// Start decoding every slide image not yet requested
    pub fn request_all(&mut self, slides: &[Slide], tx: &mpsc::UnboundedSender<ImageLoadResult>) {
        for slide in slides {
            let path = slide.image();
            if self.states.contains_key(path) {
                continue;
            }
            self.states.insert(path.to_path_buf(), ImageState::Loading);
            spawn_image_load(path.to_path_buf(), tx.clone());
        }
    }

    /// Record a finished decode
    pub fn apply(&mut self, result: ImageLoadResult) {
        match result {
            ImageLoadResult::Success { path, image } => {
                debug!("Image ready: {}", path.display());
                self.grids.remove(&path);
                self.states.insert(path, ImageState::Ready(image));
            }
            ImageLoadResult::Failure { path, error } => {
                warn!("Failed to load {}: {}", path.display(), error);
                self.grids.remove(&path);
                self.states.insert(path, ImageState::Failed(error));
            }
        }
    }

    /// Cells for one slide at the given size
    pub fn grid_for(&mut self, slide: &Slide, width: u16, height: u16, theme: &Theme) -> Arc<CellGrid> {
        if self.grid_size != (width, height) {
            self.grids.clear();
            self.grid_size = (width, height);
        }

        let path = slide.image();
        match self.states.get(path) {
            Some(ImageState::Ready(image)) => {
                if let Some(grid) = self.grids.get(path) {
                    return Arc::clone(grid);
                }
                let grid = Arc::new(rasterize(image, width, height));
                self.grids.insert(path.to_path_buf(), Arc::clone(&grid));
                grid
            }
            Some(ImageState::Loading) => Arc::new(text_panel(
                width,
                height,
                slide.alt_text(),
                Some("Loading image..."),
                theme,
            )),
            Some(ImageState::Failed(_)) | None => {
                Arc::new(text_panel(width, height, slide.alt_text(), None, theme))
            }
        }
    }
}

/// Decode an image file on the blocking pool and report through `tx`
fn spawn_image_load(path: PathBuf, tx: mpsc::UnboundedSender<ImageLoadResult>) {
    tokio::task::spawn_blocking(move || {
        let result = match image::open(&path) {
            Ok(image) => ImageLoadResult::Success {
                path,
                image: Arc::new(image),
            },
            Err(e) => ImageLoadResult::Failure {
                path,
                error: e.to_string(),
            },
        };
        // Receiver gone means the slideshow already closed
        let _ = tx.send(result);
    });
}

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use carousel_core::{config::UiConfig, Slide};

use crate::input::HitAreas;
use crate::theme::Theme;

const ARROW_WIDTH: u16 = 3;
const ARROW_HEIGHT: u16 = 3;
const CAPTION_HEIGHT: u16 = 4;
const CAPTION_MAX_WIDTH: u16 = 48;

/// Screen regions for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideshowLayout {
    /// Track plus dot row
    pub stage: Rect,
    pub track: Rect,
    pub previous: Option<Rect>,
    pub next: Option<Rect>,
    pub caption: Option<Rect>,
    pub dots: Vec<Rect>,
    pub status: Option<Rect>,
}

impl SlideshowLayout {
    pub fn compute(area: Rect, ui: &UiConfig, slide_count: usize) -> Self {
        let mut stage = area;
        let status = (ui.show_status_bar && area.height > 1).then(|| {
            stage.height -= 1;
            Rect::new(area.x, stage.bottom(), area.width, 1)
        });

        let mut track = stage;
        let dots_row = (ui.show_dots && slide_count > 0 && stage.height > 2).then(|| {
            track.height -= 1;
            Rect::new(stage.x, track.bottom(), stage.width, 1)
        });

        let arrows = slide_count > 0
            && track.width >= ARROW_WIDTH * 4
            && track.height >= ARROW_HEIGHT;
        let arrow_y = track.y + (track.height.saturating_sub(ARROW_HEIGHT)) / 2;
        let previous = arrows.then(|| Rect::new(track.x + 1, arrow_y, ARROW_WIDTH, ARROW_HEIGHT));
        let next = arrows.then(|| {
            Rect::new(
                track.right() - ARROW_WIDTH - 1,
                arrow_y,
                ARROW_WIDTH,
                ARROW_HEIGHT,
            )
        });

        let caption = (ui.show_caption
            && slide_count > 0
            && track.height >= CAPTION_HEIGHT * 2
            && track.width >= 12)
            .then(|| {
                let width = (track.width - 4).min(CAPTION_MAX_WIDTH);
                Rect::new(track.x + 2, track.bottom() - CAPTION_HEIGHT - 1, width, CAPTION_HEIGHT)
            });

        let dots = dots_row
            .map(|row| dot_positions(row, slide_count))
            .unwrap_or_default();

        Self {
            stage,
            track,
            previous,
            next,
            caption,
            dots,
            status,
        }
    }

    pub fn hit_areas(&self) -> HitAreas {
        HitAreas {
            stage: self.stage,
            previous: self.previous.unwrap_or_default(),
            next: self.next.unwrap_or_default(),
            dots: self.dots.clone(),
        }
    }
}

/// One-cell dots separated by a space, centered in `row`; dots that do not fit are dropped
fn dot_positions(row: Rect, count: usize) -> Vec<Rect> {
    let fit = (row.width as usize).div_ceil(2).min(count);
    let total = (fit * 2).saturating_sub(1) as u16;
    let start = row.x + row.width.saturating_sub(total) / 2;
    (0..fit)
        .map(|i| Rect::new(start + i as u16 * 2, row.y, 1, 1))
        .collect()
}

pub struct CarouselChrome;

impl CarouselChrome {
    /// Arrow buttons; dimmed when they would do nothing
    pub fn render_arrows(frame: &mut Frame, layout: &SlideshowLayout, enabled: bool, theme: &Theme) {
        let color = if enabled { theme.accent } else { theme.inactive };
        for (area, symbol) in [(layout.previous, "‹"), (layout.next, "›")] {
            let Some(area) = area else {
                continue;
            };
            let button = Paragraph::new(Line::from(Span::styled(
                symbol,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(theme.bg1)),
            );
            frame.render_widget(Clear, area);
            frame.render_widget(button, area);
        }
    }

    pub fn render_caption(frame: &mut Frame, area: Rect, slide: &Slide, theme: &Theme) {
        let lines = vec![
            Line::from(Span::styled(
                slide.label(),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(slide.note(), Style::default().fg(theme.muted))),
        ];
        let caption = Paragraph::new(lines).block(
            Block::default()
                .padding(Padding::uniform(1))
                .style(Style::default().bg(theme.bg1)),
        );
        frame.render_widget(Clear, area);
        frame.render_widget(caption, area);
    }

    pub fn render_dots(frame: &mut Frame, dots: &[Rect], shown: Option<usize>, theme: &Theme) {
        for (i, area) in dots.iter().enumerate() {
            let active = shown == Some(i);
            let (symbol, color) = if active {
                ("●", theme.accent)
            } else {
                ("•", theme.inactive)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(symbol, Style::default().fg(color).bg(theme.bg0))),
                *area,
            );
        }
    }

    /// Message shown when the deck has no slides
    pub fn render_placeholder(frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(Span::styled(
                "No slides",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Add slides to your deck file and restart.",
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
            )),
        ];
        let height = (lines.len() as u16).min(area.height);
        let centered = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(height) / 2,
            width: area.width,
            height,
        };
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(theme.bg0)),
            centered,
        );
    }
}

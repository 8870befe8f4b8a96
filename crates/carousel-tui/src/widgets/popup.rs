use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use carousel_core::config::KeymapConfig;

use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Key help overlay
    pub fn render_help(frame: &mut Frame, keys: &KeymapConfig, theme: &Theme) {
        let rows: Vec<(String, &str)> = vec![
            (format!("{} / ←", keys.previous), "previous slide"),
            (format!("{} / →", keys.next), "next slide"),
            (format!("{} / Home", keys.first), "first slide"),
            (format!("{} / End", keys.last), "last slide"),
            (keys.toggle_pause.clone(), "pause / resume autoplay"),
            ("click ‹ › •".to_string(), "browse with the mouse"),
            (keys.help.clone(), "toggle this help"),
            (format!("{} / C-c", keys.quit), "quit"),
        ];

        let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        let mut lines: Vec<Line> = rows
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:>width$}  ", key, width = key_width),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(desc, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "Press any key to close",
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
        );

        let area = frame.area();
        let popup_width = 46u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.bg1));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Truncate a string to max length with ellipsis
pub(crate) fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(centered_rect(40, 10, area), Rect::new(0, 0, 10, 5));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Keys", 10), "Keys");
        assert_eq!(truncate_str("Conference Setup", 10), "Confere...");
        assert_eq!(truncate_str("Conference", 2), "Co");
    }
}

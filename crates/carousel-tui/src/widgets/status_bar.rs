use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

use super::popup::truncate_str;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let show = &app.slideshow;

        let (mode_str, mode_color) = if !show.autoplay_enabled() || show.len() < 2 {
            ("MANUAL", theme.muted)
        } else if show.is_paused() {
            ("PAUSED", theme.warning)
        } else {
            ("PLAYING", theme.success)
        };

        let position = if show.is_empty() {
            "0/0".to_string()
        } else {
            format!("{}/{}", show.shown_index() + 1, show.len())
        };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {} ", msg),
            None => format!(" {} | {} ", position, truncate_str(&app.title, 40)),
        };

        let keys = &app.config.keymap;
        let help_hint = format!(
            " {}/{}:browse {}:pause {}:help {}:quit ",
            keys.previous, keys.next, keys.toggle_pause, keys.help, keys.quit
        );

        let mode = format!(" {} ", mode_str);
        let used = mode.width() + status_text.width() + help_hint.width();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                mode,
                Style::default()
                    .fg(theme.bg0)
                    .bg(mode_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

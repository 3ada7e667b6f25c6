use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let state_str = if app.is_dragging() {
            "DRAGGING"
        } else if app.carousel.animator().is_animating() {
            "SETTLING"
        } else {
            "IDLE"
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", state_str, msg)
        } else {
            format!(
                " {} | Item {}/{} | Threshold: {} px/s",
                state_str,
                (app.carousel.committed_index() + 1).min(app.items.len()),
                app.items.len(),
                app.carousel.config().velocity_threshold
            )
        };

        let help_hint = " drag:swipe q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(app.theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey2).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

/// One dot per item, the committed item highlighted
pub struct IndicatorWidget;

impl IndicatorWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let line = Self::dots(app.items.len(), app.carousel.committed_index(), &app.theme);
        let paragraph = Paragraph::new(line)
            .style(Style::default().bg(app.theme.bg0))
            .centered();
        frame.render_widget(paragraph, area);
    }

    pub fn dots(count: usize, selected: usize, theme: &Theme) -> Line<'static> {
        let spans: Vec<Span> = (0..count)
            .flat_map(|index| {
                let dot = if index == selected {
                    Span::styled("●", Style::default().fg(theme.dot_selected))
                } else {
                    Span::styled("●", Style::default().fg(theme.dot))
                };
                let gap = if index + 1 < count { " " } else { "" };
                [dot, Span::raw(gap)]
            })
            .collect();
        Line::from(spans)
    }
}

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use carousel_core::Item;

use crate::app::App;

/// Renders the strip of full-width cards at the animator's current translation
pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.bg0)),
            area,
        );

        if area.width == 0 || area.height == 0 {
            return;
        }

        if app.items.is_empty() {
            let empty = Paragraph::new("no items")
                .style(Style::default().fg(app.theme.grey0))
                .centered();
            frame.render_widget(empty, area);
            return;
        }

        let width = area.width as i32;
        let strip_x = app.strip_x().round() as i32;
        let selected = app.carousel.committed_index();

        for (index, item) in app.items.iter().enumerate() {
            let left = area.x as i32 + strip_x + index as i32 * width;
            let right = left + width;
            let visible_left = left.max(area.x as i32);
            let visible_right = right.min(area.right() as i32);
            if visible_left >= visible_right {
                continue;
            }

            let clip = (visible_left - left) as usize;
            let visible_width = (visible_right - visible_left) as usize;

            let style = if index == selected {
                Style::default().fg(app.theme.fg1).bg(app.theme.bg1)
            } else {
                Style::default().fg(app.theme.grey2).bg(app.theme.bg0)
            };

            let card = card_lines(
                item,
                index,
                app.items.len(),
                area.width as usize,
                area.height as usize,
            );
            let lines: Vec<Line> = card
                .iter()
                .map(|line| Line::from(slice_columns(line, clip, visible_width)))
                .collect();

            let slice_area = Rect::new(
                visible_left as u16,
                area.y,
                visible_width as u16,
                area.height,
            );
            frame.render_widget(Paragraph::new(lines).style(style), slice_area);
        }
    }
}

/// Draw one card as `height` rows, each exactly `width` columns wide
pub fn card_lines(
    item: &Item,
    index: usize,
    count: usize,
    width: usize,
    height: usize,
) -> Vec<String> {
    if width < 4 || height < 2 {
        return vec![" ".repeat(width); height];
    }

    let inner = width - 2;
    let content_width = inner.saturating_sub(2).max(1);

    let mut body = vec![String::new()];
    if !item.image.is_empty() {
        body.push(format!("[ {} ]", item.image));
        body.push(String::new());
    }
    body.extend(wrap(&item.text, content_width));

    let footer = format!("{} / {}", index + 1, count);
    let body_rows = height - 2;

    let mut lines = Vec::with_capacity(height);
    lines.push(format!("┌{}┐", "─".repeat(inner)));
    for row in 0..body_rows {
        let text = if row + 1 == body_rows && body_rows > 1 {
            footer.as_str()
        } else {
            body.get(row).map(String::as_str).unwrap_or("")
        };
        lines.push(format!("│{}│", pad_center(text, inner)));
    }
    lines.push(format!("└{}┘", "─".repeat(inner)));
    lines
}

/// Greedy word wrap by display width; words wider than `width` are split
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if current_width + w > width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Center `text` in exactly `width` columns, truncating when too wide
pub fn pad_center(text: &str, width: usize) -> String {
    let text = slice_columns(text, 0, width);
    let text_width = display_width(text.trim_end());
    let left = (width - text_width) / 2;
    let mut out = " ".repeat(left);
    out.push_str(text.trim_end());
    out.push_str(&" ".repeat(width - left - text_width));
    out
}

/// Columns `[start, start + len)` of `text`, padded with spaces to `len`.
/// A wide character cut by either edge becomes a space.
pub fn slice_columns(text: &str, start: usize, len: usize) -> String {
    let end = start + len;
    let mut out = String::with_capacity(len);
    let mut column = 0;
    let mut written = 0;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        let next = column + w;
        if next <= start {
            column = next;
            continue;
        }
        if column >= end {
            break;
        }
        if column < start || next > end {
            let overlap = next.min(end) - column.max(start);
            out.push_str(&" ".repeat(overlap));
            written += overlap;
        } else if w > 0 {
            out.push(ch);
            written += w;
        }
        column = next;
    }

    if written < len {
        out.push_str(&" ".repeat(len - written));
    }
    out
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

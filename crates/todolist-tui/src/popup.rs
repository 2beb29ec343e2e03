use crate::theme::{error_text, highlight_text, input_border, normal_text, popup_bg};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Text prompt with an optional inline validation message under the field.
pub fn render_input_popup(
    frame: &mut Frame,
    title: &str,
    label: &str,
    input_text: &str,
    cursor_column: usize,
    error: Option<&str>,
) {
    let area = centered_rect(60, 40, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let label_widget = Paragraph::new(label).style(highlight_text());
    frame.render_widget(label_widget, chunks[0]);

    let input = Paragraph::new(input_text).style(normal_text()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(input_border(error.is_some(), true)),
    );
    frame.render_widget(input, chunks[1]);

    if let Some(message) = error {
        frame.render_widget(Paragraph::new(message).style(error_text()), chunks[2]);
    }

    frame.set_cursor_position(input_cursor_position(chunks[1], cursor_column));
}

/// Terminal cursor inside a bordered one-line input, pinned to its last
/// column when the text is wider than the field.
pub fn input_cursor_position(field: Rect, cursor_column: usize) -> Position {
    let first = field.x.saturating_add(1);
    let last = field.right().saturating_sub(2).max(first);
    let offset = u16::try_from(cursor_column).unwrap_or(u16::MAX);
    Position::new(first.saturating_add(offset).min(last), field.y.saturating_add(1))
}

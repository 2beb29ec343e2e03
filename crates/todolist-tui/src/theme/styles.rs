use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn list_border(focused: bool) -> Style {
    if focused {
        focused_border()
    } else {
        unfocused_border()
    }
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn done_text() -> Style {
    Style::default()
        .fg(DONE_TEXT)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn active_filter() -> Style {
    Style::default()
        .fg(ACTIVE_FILTER)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}

pub fn input_border(has_error: bool, focused: bool) -> Style {
    if has_error {
        error_text()
    } else {
        list_border(focused)
    }
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}

use crate::app::{App, AppMode};
use crate::keybindings::footer_text;
use crate::list_view::ListView;
use crate::popup::{input_cursor_position, render_input_popup};
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use todolist_domain::{FilterMode, ListState, TodoList};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_lists(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    if app.mode == AppMode::CreateList {
        render_input_popup(
            frame,
            "New List",
            "Title:",
            app.new_list.draft().as_str(),
            app.new_list.draft().cursor_column(),
            app.new_list.error(),
        );
    }
}

fn render_lists(app: &App, frame: &mut Frame, area: Rect) {
    let snapshot = app.snapshot();
    if snapshot.is_empty() {
        let empty = Paragraph::new("No lists. Press n to create one.")
            .style(label_text())
            .block(Block::default().borders(Borders::ALL).title("Lists"));
        frame.render_widget(empty, area);
        return;
    }

    let count = snapshot.len() as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area);

    let focused_id = app.focused_list_id();
    for ((list, state), column) in snapshot.entries().zip(columns.iter()) {
        let Some(view) = app.view(list.id) else {
            continue;
        };
        let focused = focused_id == Some(list.id);
        render_list(app, frame, *column, list, state, view, focused);
    }
}

fn render_list(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    list: &TodoList,
    state: &ListState,
    view: &ListView,
    focused: bool,
) {
    let counts = app.snapshot().item_counts(list.id).unwrap_or_default();
    let block = Block::default()
        .title(format!(" {} ({}/{}) ", list.title, counts.remaining, counts.total))
        .borders(Borders::ALL)
        .border_style(list_border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let error = view.validation_error();
    let editing = focused && app.mode == AppMode::EditDraft;
    let input = Paragraph::new(view.draft().as_str())
        .style(normal_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("+")
                .border_style(input_border(error.is_some(), editing)),
        );
    frame.render_widget(input, chunks[0]);
    if editing {
        frame.set_cursor_position(input_cursor_position(
            chunks[0],
            view.draft().cursor_column(),
        ));
    }

    if let Some(message) = error {
        frame.render_widget(Paragraph::new(message).style(error_text()), chunks[1]);
    }

    let selected = if focused { app.item_selection.get() } else { None };
    let items: Vec<ListItem> = view
        .visible_items(state)
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            let title_style = if item.is_done {
                done_text()
            } else {
                normal_text()
            };
            let line = Line::from(vec![
                Span::styled(item.checkbox(), highlight_text()),
                Span::raw(" "),
                Span::styled(item.title.clone(), title_style),
            ]);
            let row = ListItem::new(line);
            if selected == Some(idx) {
                row.style(selected_item(app.mode == AppMode::Normal))
            } else {
                row
            }
        })
        .collect();
    frame.render_widget(List::new(items), chunks[2]);

    frame.render_widget(Paragraph::new(filter_bar(state.filter)), chunks[3]);
}

fn filter_bar(active: FilterMode) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, filter) in FilterMode::all().into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let label = format!("[{}]", filter.label());
        if filter == active {
            spans.push(Span::styled(label, active_filter()));
        } else {
            spans.push(Span::styled(label, label_text()));
        }
    }
    Line::from(spans)
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let text = match &app.status {
        Some(status) => Line::from(Span::styled(status.clone(), error_text())),
        None => Line::from(Span::styled(footer_text(app.mode), label_text())),
    };
    let footer = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent};
use todolist_domain::FilterMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindingAction {
    Quit,
    NextList,
    PrevList,
    NavigateDown,
    NavigateUp,
    ToggleItem,
    DeleteItem,
    DeleteList,
    FocusDraft,
    SubmitDraft,
    CycleFilter,
    SetFilter(FilterMode),
    CreateList,
}

/// Footer hint for one key.
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: &'static str,
    pub short_description: &'static str,
}

impl Keybinding {
    pub const fn new(key: &'static str, short_description: &'static str) -> Self {
        Self {
            key,
            short_description,
        }
    }
}

pub struct KeybindingContext {
    pub name: &'static str,
    pub bindings: Vec<Keybinding>,
}

pub fn context_for(mode: AppMode) -> KeybindingContext {
    match mode {
        AppMode::Normal => KeybindingContext {
            name: "Lists",
            bindings: vec![
                Keybinding::new("q", "quit"),
                Keybinding::new("h/l", "list"),
                Keybinding::new("j/k", "item"),
                Keybinding::new("Space", "toggle"),
                Keybinding::new("a", "edit"),
                Keybinding::new("+", "add"),
                Keybinding::new("d", "delete"),
                Keybinding::new("f", "filter"),
                Keybinding::new("n", "new list"),
                Keybinding::new("D", "del list"),
            ],
        },
        AppMode::EditDraft => KeybindingContext {
            name: "New item",
            bindings: vec![
                Keybinding::new("Enter", "add"),
                Keybinding::new("Esc", "back"),
            ],
        },
        AppMode::CreateList => KeybindingContext {
            name: "New list",
            bindings: vec![
                Keybinding::new("Enter", "create"),
                Keybinding::new("Esc", "cancel"),
            ],
        },
    }
}

/// Command key in normal mode. Text-entry modes read keys directly.
pub fn normal_mode_action(key: &KeyEvent) -> Option<KeybindingAction> {
    use KeybindingAction::*;
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Quit,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => NextList,
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => PrevList,
        KeyCode::Char('j') | KeyCode::Down => NavigateDown,
        KeyCode::Char('k') | KeyCode::Up => NavigateUp,
        KeyCode::Char(' ') | KeyCode::Enter => ToggleItem,
        KeyCode::Char('d') | KeyCode::Delete => DeleteItem,
        KeyCode::Char('D') => DeleteList,
        KeyCode::Char('a') | KeyCode::Char('i') => FocusDraft,
        KeyCode::Char('+') => SubmitDraft,
        KeyCode::Char('f') => CycleFilter,
        KeyCode::Char('1') => SetFilter(FilterMode::All),
        KeyCode::Char('2') => SetFilter(FilterMode::Active),
        KeyCode::Char('3') => SetFilter(FilterMode::Completed),
        KeyCode::Char('n') => CreateList,
        _ => return None,
    };
    Some(action)
}

pub fn footer_text(mode: AppMode) -> String {
    let context = context_for(mode);
    let hints: Vec<String> = context
        .bindings
        .iter()
        .map(|b| format!("{}: {}", b.key, b.short_description))
        .collect();
    format!("{} | {}", context.name, hints.join("  "))
}

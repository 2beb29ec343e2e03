use crate::{
    cursor::Cursor,
    events::{Event, EventHandler},
    keybindings::{normal_mode_action, KeybindingAction},
    list_view::{ListView, SubmitOutcome},
    title_field::{FieldAction, TitleField},
    ui,
};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use todolist_core::{AppConfig, TodoResult};
use todolist_domain::{Collection, Item, ListCollectionStore, ListId, ListOperations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    EditDraft,
    CreateList,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub list_selection: Cursor,
    pub item_selection: Cursor,
    pub new_list: TitleField,
    pub status: Option<String>,
    store: ListCollectionStore,
    snapshot: Arc<Collection>,
    views: HashMap<ListId, ListView>,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &AppConfig) -> TodoResult<Self> {
        let store = if config.effective_seed_sample_lists() {
            ListCollectionStore::with_sample_lists()?
        } else {
            ListCollectionStore::new()
        };
        Ok(Self::with_store(store, config))
    }

    pub fn with_store(store: ListCollectionStore, config: &AppConfig) -> Self {
        let mut app = Self {
            should_quit: false,
            mode: AppMode::Normal,
            list_selection: Cursor::new(),
            item_selection: Cursor::new(),
            new_list: TitleField::new(),
            status: None,
            snapshot: Arc::new(Collection::new()),
            store,
            views: HashMap::new(),
            tick_rate: Duration::from_millis(config.effective_tick_rate_ms()),
        };
        app.refresh();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Snapshot the screen is drawn from.
    pub fn snapshot(&self) -> &Collection {
        &self.snapshot
    }

    pub fn store(&self) -> &ListCollectionStore {
        &self.store
    }

    pub fn view(&self, list_id: ListId) -> Option<&ListView> {
        self.views.get(&list_id)
    }

    pub fn focused_list_id(&self) -> Option<ListId> {
        self.list_selection
            .get()
            .and_then(|idx| self.snapshot.lists().get(idx))
            .map(|list| list.id)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        let list_id = self.focused_list_id()?;
        let state = self.snapshot.state(list_id)?;
        let visible = state.visible_items();
        self.item_selection
            .get()
            .and_then(|idx| visible.get(idx).copied())
    }

    fn visible_len(&self) -> usize {
        self.focused_list_id()
            .and_then(|id| self.snapshot.state(id))
            .map(|state| state.visible_items().len())
            .unwrap_or(0)
    }

    /// Pick up the latest snapshot and keep views and cursors in step with it.
    fn refresh(&mut self) {
        let latest = self.store.snapshot();
        if !Arc::ptr_eq(&latest, &self.snapshot) {
            self.views.retain(|id, _| latest.contains_list(*id));
            for list in latest.lists() {
                self.views
                    .entry(list.id)
                    .or_insert_with(|| ListView::new(list.id));
            }
            self.snapshot = latest;
        }
        self.list_selection.clamp(self.snapshot.len());
        let visible = self.visible_len();
        self.item_selection.clamp(visible);
    }

    fn report(&mut self, result: TodoResult<()>) {
        if let Err(e) = result {
            tracing::warn!("Operation failed: {}", e);
            self.status = Some(e.to_string());
        }
    }

    fn focus_list(&mut self, index: Option<usize>) {
        self.list_selection.set(index);
        self.item_selection.set(None);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        self.status = None;
        match self.mode {
            AppMode::Normal => {
                if let Some(action) = normal_mode_action(&key) {
                    self.handle_action(action);
                }
            }
            AppMode::EditDraft => self.handle_draft_key(key),
            AppMode::CreateList => self.handle_create_list_key(key),
        }
        self.refresh();
    }

    fn handle_action(&mut self, action: KeybindingAction) {
        match action {
            KeybindingAction::Quit => self.quit(),
            KeybindingAction::NextList => {
                let mut cursor = self.list_selection;
                cursor.next(self.snapshot.len());
                self.focus_list(cursor.get());
            }
            KeybindingAction::PrevList => {
                let mut cursor = self.list_selection;
                cursor.prev(self.snapshot.len());
                self.focus_list(cursor.get());
            }
            KeybindingAction::NavigateDown => {
                let len = self.visible_len();
                self.item_selection.next(len);
            }
            KeybindingAction::NavigateUp => {
                let len = self.visible_len();
                self.item_selection.prev(len);
            }
            KeybindingAction::ToggleItem => {
                let Some(item) = self.selected_item().cloned() else {
                    return;
                };
                let Some(view) = self.focused_list_id().and_then(|id| self.views.get(&id)) else {
                    return;
                };
                let result = view.toggle_item(&mut self.store, &item);
                self.report(result);
            }
            KeybindingAction::DeleteItem => {
                let Some(item_id) = self.selected_item().map(|i| i.id) else {
                    return;
                };
                let Some(view) = self.focused_list_id().and_then(|id| self.views.get(&id)) else {
                    return;
                };
                let result = view.remove_item(&mut self.store, item_id);
                self.report(result);
            }
            KeybindingAction::DeleteList => {
                let Some(view) = self.focused_list_id().and_then(|id| self.views.get(&id)) else {
                    return;
                };
                let result = view.remove_list(&mut self.store);
                self.item_selection.set(None);
                self.report(result);
            }
            KeybindingAction::FocusDraft => {
                if self.focused_list_id().is_some() {
                    self.mode = AppMode::EditDraft;
                }
            }
            KeybindingAction::SubmitDraft => self.submit_draft(),
            KeybindingAction::CycleFilter => {
                let Some(filter) = self
                    .focused_list_id()
                    .and_then(|id| self.snapshot.state(id))
                    .map(|state| state.filter.next())
                else {
                    return;
                };
                self.handle_action(KeybindingAction::SetFilter(filter));
            }
            KeybindingAction::SetFilter(filter) => {
                let Some(view) = self.focused_list_id().and_then(|id| self.views.get(&id)) else {
                    return;
                };
                let result = view.change_filter(&mut self.store, filter);
                self.item_selection.set(None);
                self.report(result);
            }
            KeybindingAction::CreateList => {
                self.new_list.clear();
                self.mode = AppMode::CreateList;
            }
        }
    }

    fn submit_draft(&mut self) {
        let Some(list_id) = self.focused_list_id() else {
            return;
        };
        let result = match self.views.get_mut(&list_id) {
            Some(view) => view.submit(&mut self.store),
            None => return,
        };
        match result {
            Ok(SubmitOutcome::Added(item_id)) => {
                self.refresh();
                // Only follow the new item if the filter shows it.
                let position = self.snapshot.state(list_id).and_then(|state| {
                    state
                        .visible_items()
                        .iter()
                        .position(|item| item.id == item_id)
                });
                if position.is_some() {
                    self.item_selection.set(position);
                }
            }
            Ok(SubmitOutcome::Rejected) => {}
            Err(e) => self.report(Err(e)),
        }
    }

    fn handle_draft_key(&mut self, key: KeyEvent) {
        let Some(view) = self
            .focused_list_id()
            .and_then(|id| self.views.get_mut(&id))
        else {
            self.mode = AppMode::Normal;
            return;
        };
        match view.handle_key(key.code) {
            FieldAction::Cancel => self.mode = AppMode::Normal,
            FieldAction::Submit => self.submit_draft(),
            FieldAction::None => {}
        }
    }

    fn handle_create_list_key(&mut self, key: KeyEvent) {
        match self.new_list.handle_key(key.code) {
            FieldAction::Cancel => {
                self.new_list.clear();
                self.mode = AppMode::Normal;
            }
            FieldAction::Submit => self.create_list(),
            FieldAction::None => {}
        }
    }

    fn create_list(&mut self) {
        let Some(title) = self.new_list.validated().map(str::to_string) else {
            return;
        };
        match self.store.create_list(title) {
            Ok(_) => {
                self.new_list.clear();
                self.mode = AppMode::Normal;
                self.refresh();
                let last = self.snapshot.len().checked_sub(1);
                self.focus_list(last);
            }
            Err(e) => self.report(Err(e)),
        }
    }

    pub async fn run(&mut self) -> TodoResult<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let mut events = EventHandler::new(self.tick_rate);
        let result = self.event_loop(&mut terminal, &mut events).await;
        events.stop();

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> TodoResult<()> {
        tracing::info!("Starting with {} lists", self.snapshot.len());
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Tick) => {}
                None => break,
            }
        }
        Ok(())
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::{Backend, TestBackend},
    Terminal,
};
use todolist_core::AppConfig;
use todolist_domain::ListCollectionStore;
use todolist_tui::{ui, App};

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| ui::render(app, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_renders_every_list_with_items_and_filter_bar() {
    let app = App::new(&AppConfig::default()).unwrap();
    let screen = draw(&app);

    assert!(screen.contains("What to learn (1/3)"));
    assert!(screen.contains("What to buy (1/2)"));
    assert!(screen.contains("[x] HTML&CSS"));
    assert!(screen.contains("[ ] ReactJS"));
    assert!(screen.contains("[All] [Active] [Completed]"));
}

#[test]
fn test_renders_validation_error() {
    let mut app = App::new(&AppConfig::default()).unwrap();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);

    assert!(draw(&app).contains("Title is required"));

    press(&mut app, KeyCode::Char('z'));
    assert!(!draw(&app).contains("Title is required"));
}

#[test]
fn test_renders_projection_only() {
    let mut app = App::new(&AppConfig::default()).unwrap();
    press(&mut app, KeyCode::Char('2'));
    let screen = draw(&app);

    assert!(screen.contains("[ ] ReactJS"));
    assert!(!screen.contains("HTML&CSS"));
    // The other list keeps its own filter.
    assert!(screen.contains("[x] Milk"));
}

#[test]
fn test_renders_empty_collection_hint() {
    let app = App::with_store(ListCollectionStore::new(), &AppConfig::default());
    assert!(draw(&app).contains("No lists. Press n to create one."));
}

#[test]
fn test_renders_new_list_popup() {
    let mut app = App::new(&AppConfig::default()).unwrap();
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char('X'));
    let screen = draw(&app);

    assert!(screen.contains("New List"));
    assert!(screen.contains("Title:"));
}

#[test]
fn test_cursor_stays_inside_long_draft_field() {
    let mut app = App::new(&AppConfig::default()).unwrap();
    press(&mut app, KeyCode::Char('a'));
    for _ in 0..120 {
        press(&mut app, KeyCode::Char('x'));
    }

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| ui::render(&app, frame)).unwrap();
    let cursor = terminal.backend_mut().get_cursor_position().unwrap();

    // Two lists share 100 columns, so the first list ends before column 50.
    assert!(cursor.x < 50, "cursor drawn at column {}", cursor.x);
}

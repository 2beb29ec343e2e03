pub mod app;
pub mod cursor;
pub mod draft;
pub mod events;
pub mod keybindings;
pub mod list_view;
pub mod popup;
pub mod theme;
pub mod title_field;
pub mod ui;

pub use app::{App, AppMode};
pub use list_view::{ListView, SubmitOutcome};
pub use title_field::{FieldAction, TitleField, TITLE_REQUIRED};

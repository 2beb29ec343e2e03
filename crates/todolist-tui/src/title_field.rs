//! Title input shared by the per-list item draft and the new-list popup.
//!
//! Both fields follow the same rules: a blank submit records
//! [`TITLE_REQUIRED`] and keeps the text, and any key the field consumes
//! clears that message again.

use crate::draft::Draft;
use crossterm::event::KeyCode;

pub const TITLE_REQUIRED: &str = "Title is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    None,
    Cancel,
    Submit,
}

#[derive(Debug, Clone, Default)]
pub struct TitleField {
    draft: Draft,
    error: Option<&'static str>,
}

impl TitleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn handle_key(&mut self, code: KeyCode) -> FieldAction {
        match code {
            KeyCode::Esc => return FieldAction::Cancel,
            KeyCode::Enter => return FieldAction::Submit,
            KeyCode::Char(c) => self.draft.insert_char(c),
            KeyCode::Backspace => self.draft.backspace(),
            KeyCode::Delete => self.draft.delete(),
            KeyCode::Left => self.draft.move_left(),
            KeyCode::Right => self.draft.move_right(),
            KeyCode::Home => self.draft.move_home(),
            KeyCode::End => self.draft.move_end(),
            _ => return FieldAction::None,
        }
        self.error = None;
        FieldAction::None
    }

    /// Trimmed title, or `None` with the error recorded when blank.
    pub fn validated(&mut self) -> Option<&str> {
        if self.draft.is_blank() {
            self.error = Some(TITLE_REQUIRED);
            return None;
        }
        Some(self.draft.trimmed())
    }

    pub fn clear(&mut self) {
        self.draft.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TitleField {
        let mut field = TitleField::new();
        text.chars().for_each(|c| {
            field.handle_key(KeyCode::Char(c));
        });
        field
    }

    #[test]
    fn test_blank_is_rejected_and_kept() {
        let mut field = typed("  ");
        assert_eq!(field.validated(), None);
        assert_eq!(field.error(), Some(TITLE_REQUIRED));
        assert_eq!(field.draft().as_str(), "  ");
    }

    #[test]
    fn test_validated_is_trimmed() {
        let mut field = typed(" milk ");
        assert_eq!(field.validated(), Some("milk"));
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_every_editing_key_clears_error() {
        for code in [
            KeyCode::Char('x'),
            KeyCode::Backspace,
            KeyCode::Delete,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Home,
            KeyCode::End,
        ] {
            let mut field = typed(" ");
            field.validated();
            assert_eq!(field.handle_key(code), FieldAction::None);
            assert_eq!(field.error(), None, "{:?} kept the error", code);
        }
    }

    #[test]
    fn test_home_and_end_move_the_cursor() {
        let mut field = typed("bc");
        field.handle_key(KeyCode::Home);
        field.handle_key(KeyCode::Char('a'));
        field.handle_key(KeyCode::End);
        field.handle_key(KeyCode::Char('d'));
        assert_eq!(field.draft().as_str(), "abcd");
    }

    #[test]
    fn test_enter_and_esc_leave_error_alone() {
        let mut field = typed("");
        field.validated();
        assert_eq!(field.handle_key(KeyCode::Enter), FieldAction::Submit);
        assert_eq!(field.handle_key(KeyCode::Esc), FieldAction::Cancel);
        assert_eq!(field.error(), Some(TITLE_REQUIRED));
    }

    #[test]
    fn test_unhandled_key_is_ignored() {
        let mut field = typed(" ");
        field.validated();
        assert_eq!(field.handle_key(KeyCode::F(5)), FieldAction::None);
        assert_eq!(field.error(), Some(TITLE_REQUIRED));
    }
}

//! Per-list presentation unit.
//!
//! A `ListView` holds only what belongs to the view: the draft title of the
//! next item and the inline validation message. Item data is always read
//! from the snapshot handed in by the caller, and every change to it goes
//! through [`ListOperations`] bound to this view's list id.
//!
//! Submission is a two-state machine:
//!
//! ```text
//! Idle --submit(non-blank)--> add_item, clear draft, Idle
//! Idle --submit(blank)------> ErrorShown (draft kept)
//! ErrorShown --keystroke----> Idle (draft edited)
//! ```

use crossterm::event::KeyCode;
use todolist_core::TodoResult;
use todolist_domain::{FilterMode, Item, ItemId, ListId, ListOperations, ListState};

use crate::draft::Draft;
use crate::title_field::{FieldAction, TitleField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(ItemId),
    Rejected,
}

#[derive(Debug, Clone)]
pub struct ListView {
    list_id: ListId,
    field: TitleField,
}

impl ListView {
    pub fn new(list_id: ListId) -> Self {
        Self {
            list_id,
            field: TitleField::new(),
        }
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    pub fn draft(&self) -> &Draft {
        self.field.draft()
    }

    pub fn validation_error(&self) -> Option<&'static str> {
        self.field.error()
    }

    /// Items of `state` that pass its filter, in list order.
    pub fn visible_items<'a>(&self, state: &'a ListState) -> Vec<&'a Item> {
        state.filter.project(&state.items)
    }

    /// Feeds one key to the draft field.
    pub fn handle_key(&mut self, code: KeyCode) -> FieldAction {
        self.field.handle_key(code)
    }

    /// Shared by the add action and the submit key.
    pub fn submit(&mut self, ops: &mut dyn ListOperations) -> TodoResult<SubmitOutcome> {
        let Some(title) = self.field.validated() else {
            tracing::debug!("Rejected blank item title for list {}", self.list_id);
            return Ok(SubmitOutcome::Rejected);
        };

        let item_id = ops.add_item(self.list_id, title)?;
        self.field.clear();
        Ok(SubmitOutcome::Added(item_id))
    }

    pub fn set_item_done(
        &self,
        ops: &mut dyn ListOperations,
        item_id: ItemId,
        is_done: bool,
    ) -> TodoResult<()> {
        ops.set_item_done(self.list_id, item_id, is_done)
    }

    pub fn toggle_item(&self, ops: &mut dyn ListOperations, item: &Item) -> TodoResult<()> {
        self.set_item_done(ops, item.id, !item.is_done)
    }

    pub fn remove_item(&self, ops: &mut dyn ListOperations, item_id: ItemId) -> TodoResult<()> {
        ops.remove_item(self.list_id, item_id)
    }

    pub fn change_filter(&self, ops: &mut dyn ListOperations, filter: FilterMode) -> TodoResult<()> {
        ops.set_filter(self.list_id, filter)
    }

    pub fn remove_list(&self, ops: &mut dyn ListOperations) -> TodoResult<()> {
        ops.remove_list(self.list_id)
    }
}

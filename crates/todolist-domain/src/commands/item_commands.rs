use super::{Command, CommandContext};
use crate::{Item, ItemId, ListId};
use todolist_core::{TodoError, TodoResult};

/// Insert a new, not-done item at the front of a list
pub struct AddItem {
    pub list_id: ListId,
    pub item_id: ItemId,
    pub title: String,
}

impl Command for AddItem {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TodoError::title_required());
        }

        let existing = context
            .state(self.list_id)
            .ok_or_else(|| TodoError::NotFound(format!("list {}", self.list_id)))?;
        if existing.contains_item(self.item_id) {
            return Err(TodoError::Validation(format!(
                "item id {} already in use",
                self.item_id
            )));
        }

        if let Some(state) = context.state_mut(self.list_id) {
            state.items.insert(0, Item::new(self.item_id, title.to_string()));
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add item '{}' to list {}", self.title.trim(), self.list_id)
    }
}

/// Remove an item; removing an item that is already gone does nothing
pub struct RemoveItem {
    pub list_id: ListId,
    pub item_id: ItemId,
}

impl Command for RemoveItem {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        let present = context
            .state(self.list_id)
            .is_some_and(|s| s.contains_item(self.item_id));
        if present {
            if let Some(state) = context.state_mut(self.list_id) {
                state.items.retain(|i| i.id != self.item_id);
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove item {} from list {}", self.item_id, self.list_id)
    }
}

/// Mark an item done or not done, keeping its position and title
pub struct SetItemDone {
    pub list_id: ListId,
    pub item_id: ItemId,
    pub is_done: bool,
}

impl Command for SetItemDone {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        let needs_change = context
            .state(self.list_id)
            .and_then(|s| s.item(self.item_id))
            .is_some_and(|i| i.is_done != self.is_done);
        if needs_change {
            if let Some(item) = context
                .state_mut(self.list_id)
                .and_then(|s| s.items.iter_mut().find(|i| i.id == self.item_id))
            {
                item.is_done = self.is_done;
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        let status = if self.is_done { "done" } else { "not done" };
        format!("Mark item {} in list {} {}", self.item_id, self.list_id, status)
    }
}

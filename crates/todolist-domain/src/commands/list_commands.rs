use super::{Command, CommandContext};
use crate::{FilterMode, ListId, ListState, TodoList};
use std::sync::Arc;
use todolist_core::{TodoError, TodoResult};

/// Create a list together with its empty state
pub struct CreateList {
    pub list_id: ListId,
    pub title: String,
}

impl Command for CreateList {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        if context.states.contains_key(&self.list_id)
            || context.lists.iter().any(|l| l.id == self.list_id)
        {
            return Err(TodoError::Validation(format!(
                "list id {} already in use",
                self.list_id
            )));
        }
        context
            .lists
            .push(TodoList::new(self.list_id, self.title.clone()));
        context
            .states
            .insert(self.list_id, Arc::new(ListState::new()));
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create list: '{}'", self.title)
    }
}

/// Remove a list and its state in one step
pub struct RemoveList {
    pub list_id: ListId,
}

impl Command for RemoveList {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context.lists.retain(|l| l.id != self.list_id);
        context.states.remove(&self.list_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove list {}", self.list_id)
    }
}

/// Change which items of a list are visible
pub struct SetFilter {
    pub list_id: ListId,
    pub filter: FilterMode,
}

impl Command for SetFilter {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        let current = context
            .state(self.list_id)
            .ok_or_else(|| TodoError::NotFound(format!("list {}", self.list_id)))?
            .filter;
        if current != self.filter {
            if let Some(state) = context.state_mut(self.list_id) {
                state.filter = self.filter;
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set filter of list {} to {}", self.list_id, self.filter.label())
    }
}

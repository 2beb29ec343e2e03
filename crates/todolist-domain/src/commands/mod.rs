use crate::{Collection, ListId, ListState, TodoList};
use std::collections::HashMap;
use std::sync::Arc;
use todolist_core::TodoResult;

pub mod item_commands;
pub mod list_commands;

pub use item_commands::*;
pub use list_commands::*;

/// Trait for domain commands that mutate state
/// Commands carry every identifier they need; they never generate ids themselves
pub trait Command: Send + Sync {
    /// Apply this command to a draft of the next snapshot
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
/// Borrows the draft collection that becomes the next snapshot if the command succeeds
pub struct CommandContext<'a> {
    pub(crate) lists: &'a mut Vec<TodoList>,
    pub(crate) states: &'a mut HashMap<ListId, Arc<ListState>>,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(draft: &'a mut Collection) -> Self {
        Self {
            lists: &mut draft.lists,
            states: &mut draft.states,
        }
    }

    /// Writable state for `list_id`; clones it first if the published snapshot still shares it.
    pub(crate) fn state_mut(&mut self, list_id: ListId) -> Option<&mut ListState> {
        self.states.get_mut(&list_id).map(Arc::make_mut)
    }

    pub(crate) fn state(&self, list_id: ListId) -> Option<&ListState> {
        self.states.get(&list_id).map(Arc::as_ref)
    }
}

use crate::{Collection, FilterMode, ItemId, ListId};
use std::sync::Arc;
use todolist_core::TodoResult;

/// Mutation surface shared by every presentation layer.
/// Views route user intents through this trait and never touch a snapshot directly.
pub trait ListOperations {
    fn create_list(&mut self, title: String) -> TodoResult<ListId>;
    fn remove_list(&mut self, list_id: ListId) -> TodoResult<()>;

    fn add_item(&mut self, list_id: ListId, title: &str) -> TodoResult<ItemId>;
    fn remove_item(&mut self, list_id: ListId, item_id: ItemId) -> TodoResult<()>;
    fn set_item_done(&mut self, list_id: ListId, item_id: ItemId, is_done: bool)
        -> TodoResult<()>;

    fn set_filter(&mut self, list_id: ListId, filter: FilterMode) -> TodoResult<()>;

    /// Latest published snapshot.
    fn snapshot(&self) -> Arc<Collection>;
}

use crate::{FilterMode, Item, ItemId};

/// Items and active filter of one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub items: Vec<Item>,
    pub filter: FilterMode,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        self.filter.project(&self.items)
    }

    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn contains_item(&self, item_id: ItemId) -> bool {
        self.item(item_id).is_some()
    }
}

use uuid::Uuid;

pub type ItemId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub is_done: bool,
}

impl Item {
    pub fn new(id: ItemId, title: String) -> Self {
        Self {
            id,
            title,
            is_done: false,
        }
    }

    pub fn checkbox(&self) -> &'static str {
        if self.is_done {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_not_done() {
        let item = Item::new(Uuid::new_v4(), "buy milk".to_string());
        assert!(!item.is_done);
        assert_eq!(item.checkbox(), "[ ]");
    }

    #[test]
    fn test_checkbox_for_done_item() {
        let mut item = Item::new(Uuid::new_v4(), "buy milk".to_string());
        item.is_done = true;
        assert_eq!(item.checkbox(), "[x]");
    }
}

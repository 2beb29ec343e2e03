use uuid::Uuid;

pub type ListId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    pub id: ListId,
    pub title: String,
}

impl TodoList {
    pub fn new(id: ListId, title: String) -> Self {
        Self { id, title }
    }
}

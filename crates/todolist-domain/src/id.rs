use uuid::Uuid;

/// Source of fresh identifiers for lists and items.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    fn next_id(&self) -> Uuid;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

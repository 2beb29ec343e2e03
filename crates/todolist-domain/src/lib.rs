pub mod collection;
pub mod commands;
pub mod filter;
pub mod id;
pub mod item;
pub mod list;
pub mod list_state;
pub mod operations;
pub mod store;

pub use collection::{Collection, ItemCounts};
pub use filter::FilterMode;
pub use id::{IdGenerator, UuidGenerator};
pub use item::{Item, ItemId};
pub use list::{ListId, TodoList};
pub use list_state::ListState;
pub use operations::ListOperations;
pub use store::ListCollectionStore;

use crate::commands::{
    AddItem, Command, CommandContext, CreateList, RemoveItem, RemoveList, SetFilter, SetItemDone,
};
use crate::{Collection, FilterMode, IdGenerator, ItemId, ListId, ListOperations, UuidGenerator};
use std::sync::Arc;
use todolist_core::TodoResult;

const SAMPLE_LISTS: &[(&str, &[(&str, bool)])] = &[
    (
        "What to learn",
        &[("HTML&CSS", true), ("JS", true), ("ReactJS", false)],
    ),
    ("What to buy", &[("Milk", true), ("Bread", false)]),
];

/// Owns the authoritative collection and publishes a new snapshot per mutation
///
/// # Publishing
///
/// A command runs against a private clone of the current snapshot. Only when
/// it succeeds is the clone wrapped in a fresh `Arc` and swapped in, so:
/// - a failed command leaves the previous snapshot in place
/// - readers holding an older `Arc<Collection>` never see it change
/// - `Arc::ptr_eq` on two snapshots tells whether anything was published
pub struct ListCollectionStore {
    current: Arc<Collection>,
    version: u64,
    ids: Box<dyn IdGenerator>,
}

impl ListCollectionStore {
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidGenerator))
    }

    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            current: Arc::new(Collection::new()),
            version: 0,
            ids,
        }
    }

    /// Store pre-populated with the two example lists.
    pub fn with_sample_lists() -> TodoResult<Self> {
        let mut store = Self::new();
        store.seed_sample_lists()?;
        Ok(store)
    }

    pub fn seed_sample_lists(&mut self) -> TodoResult<()> {
        for (title, items) in SAMPLE_LISTS {
            let list_id = self.create_list(title.to_string())?;
            // Items land at the front, so insert in reverse to keep display order.
            for (item_title, is_done) in items.iter().rev() {
                let item_id = self.add_item(list_id, item_title)?;
                if *is_done {
                    self.set_item_done(list_id, item_id, true)?;
                }
            }
        }
        tracing::debug!("Seeded {} sample lists", SAMPLE_LISTS.len());
        Ok(())
    }

    /// Number of snapshots published so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Execute a command and publish the resulting snapshot
    pub fn execute(&mut self, command: &dyn Command) -> TodoResult<()> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let mut draft = Collection::clone(&self.current);
        if let Err(e) = command.execute(&mut CommandContext::new(&mut draft)) {
            tracing::warn!("Declined: {}: {}", description, e);
            return Err(e);
        }
        debug_assert!(draft.is_consistent(), "pairing broken by: {}", description);

        self.current = Arc::new(draft);
        self.version += 1;
        Ok(())
    }
}

impl Default for ListCollectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListOperations for ListCollectionStore {
    fn create_list(&mut self, title: String) -> TodoResult<ListId> {
        let list_id = self.ids.next_id();
        self.execute(&CreateList { list_id, title })?;
        Ok(list_id)
    }

    fn remove_list(&mut self, list_id: ListId) -> TodoResult<()> {
        self.execute(&RemoveList { list_id })
    }

    fn add_item(&mut self, list_id: ListId, title: &str) -> TodoResult<ItemId> {
        let item_id = self.ids.next_id();
        self.execute(&AddItem {
            list_id,
            item_id,
            title: title.to_string(),
        })?;
        Ok(item_id)
    }

    fn remove_item(&mut self, list_id: ListId, item_id: ItemId) -> TodoResult<()> {
        self.execute(&RemoveItem { list_id, item_id })
    }

    fn set_item_done(
        &mut self,
        list_id: ListId,
        item_id: ItemId,
        is_done: bool,
    ) -> TodoResult<()> {
        self.execute(&SetItemDone {
            list_id,
            item_id,
            is_done,
        })
    }

    fn set_filter(&mut self, list_id: ListId, filter: FilterMode) -> TodoResult<()> {
        self.execute(&SetFilter { list_id, filter })
    }

    fn snapshot(&self) -> Arc<Collection> {
        Arc::clone(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::MockIdGenerator;
    use todolist_core::TodoError;
    use uuid::Uuid;

    fn store_with_ids(ids: Vec<Uuid>) -> ListCollectionStore {
        let mut seq = ids.into_iter();
        let mut mock = MockIdGenerator::new();
        mock.expect_next_id()
            .returning(move || seq.next().expect("test ran out of ids"));
        ListCollectionStore::with_id_generator(Box::new(mock))
    }

    #[test]
    fn test_create_list_uses_generated_id() {
        let list_id = Uuid::new_v4();
        let mut store = store_with_ids(vec![list_id]);

        let created = store.create_list("Groceries".to_string()).unwrap();
        assert_eq!(created, list_id);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.lists()[0].title, "Groceries");
        let state = snapshot.state(list_id).unwrap();
        assert!(state.items.is_empty());
        assert_eq!(state.filter, FilterMode::All);
    }

    #[test]
    fn test_create_then_remove_restores_prior_state() {
        let mut store = ListCollectionStore::new();
        store.create_list("Keep".to_string()).unwrap();
        let before = store.snapshot();

        let id = store.create_list("Temporary".to_string()).unwrap();
        store.remove_list(id).unwrap();

        assert_eq!(*store.snapshot(), *before);
        assert!(store.snapshot().is_consistent());
    }

    #[test]
    fn test_duplicate_list_id_is_declined() {
        let id = Uuid::new_v4();
        let mut store = store_with_ids(vec![id, id]);
        store.create_list("First".to_string()).unwrap();
        let before = store.snapshot();

        let result = store.create_list("Second".to_string());
        assert!(matches!(result, Err(TodoError::Validation(_))));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_add_item_goes_to_front_trimmed() {
        let list_id = Uuid::new_v4();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut store = store_with_ids(vec![list_id, first, second]);
        store.create_list("L".to_string()).unwrap();

        assert_eq!(store.add_item(list_id, "first").unwrap(), first);
        assert_eq!(store.add_item(list_id, "  X  ").unwrap(), second);

        let snapshot = store.snapshot();
        let items = &snapshot.state(list_id).unwrap().items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, second);
        assert_eq!(items[0].title, "X");
        assert!(!items[0].is_done);
        assert_eq!(items[1].title, "first");
    }

    #[test]
    fn test_add_item_to_missing_list_fails_without_publishing() {
        let mut store = ListCollectionStore::new();
        let before = store.snapshot();
        let version = store.version();

        let result = store.add_item(Uuid::new_v4(), "orphan");
        assert!(matches!(result, Err(TodoError::NotFound(_))));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(store.version(), version);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_add_blank_item_is_declined() {
        let mut store = ListCollectionStore::new();
        let list_id = store.create_list("L".to_string()).unwrap();
        let before = store.snapshot();

        let result = store.add_item(list_id, "   ");
        assert!(matches!(result, Err(TodoError::Validation(_))));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let mut store = ListCollectionStore::new();
        let list_id = store.create_list("L".to_string()).unwrap();
        store.add_item(list_id, "a").unwrap();
        let before = store.snapshot();

        store.remove_item(list_id, Uuid::new_v4()).unwrap();
        store.remove_item(Uuid::new_v4(), Uuid::new_v4()).unwrap();

        assert_eq!(
            store.snapshot().state(list_id).unwrap().items,
            before.state(list_id).unwrap().items
        );
    }

    #[test]
    fn test_remove_item_twice_is_idempotent() {
        let mut store = ListCollectionStore::new();
        let list_id = store.create_list("L".to_string()).unwrap();
        let keep = store.add_item(list_id, "keep").unwrap();
        let gone = store.add_item(list_id, "gone").unwrap();

        store.remove_item(list_id, gone).unwrap();
        store.remove_item(list_id, gone).unwrap();

        let snapshot = store.snapshot();
        let items = &snapshot.state(list_id).unwrap().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, keep);
    }

    #[test]
    fn test_set_item_done_keeps_position_and_title() {
        let mut store = ListCollectionStore::new();
        let list_id = store.create_list("L".to_string()).unwrap();
        let a = store.add_item(list_id, "a").unwrap();
        store.add_item(list_id, "b").unwrap();

        store.set_item_done(list_id, a, true).unwrap();

        let snapshot = store.snapshot();
        let items = &snapshot.state(list_id).unwrap().items;
        assert_eq!(items[1].id, a);
        assert_eq!(items[1].title, "a");
        assert!(items[1].is_done);
        assert!(!items[0].is_done);
    }

    #[test]
    fn test_set_item_done_on_missing_item_is_noop() {
        let mut store = ListCollectionStore::new();
        let list_id = store.create_list("L".to_string()).unwrap();
        let before = store.snapshot();

        store.set_item_done(list_id, Uuid::new_v4(), true).unwrap();
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_set_filter_on_missing_list_fails() {
        let mut store = ListCollectionStore::new();
        let result = store.set_filter(Uuid::new_v4(), FilterMode::Active);
        assert!(matches!(result, Err(TodoError::NotFound(_))));
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_set_filter_changes_only_filter() {
        let mut store = ListCollectionStore::new();
        let list_id = store.create_list("L".to_string()).unwrap();
        store.add_item(list_id, "a").unwrap();
        let before = store.snapshot();

        store.set_filter(list_id, FilterMode::Completed).unwrap();

        let snapshot = store.snapshot();
        let state = snapshot.state(list_id).unwrap();
        assert_eq!(state.filter, FilterMode::Completed);
        assert_eq!(state.items, before.state(list_id).unwrap().items);
    }

    #[test]
    fn test_published_snapshots_never_change() {
        let mut store = ListCollectionStore::new();
        let list_id = store.create_list("L".to_string()).unwrap();
        let item_id = store.add_item(list_id, "a").unwrap();
        let held = store.snapshot();
        let copy = Collection::clone(&held);

        store.set_item_done(list_id, item_id, true).unwrap();
        store.set_filter(list_id, FilterMode::Active).unwrap();
        store.add_item(list_id, "b").unwrap();
        store.remove_list(list_id).unwrap();

        assert_eq!(*held, copy);
        assert!(!held.state(list_id).unwrap().items[0].is_done);
    }

    #[test]
    fn test_untouched_lists_are_shared_between_snapshots() {
        let mut store = ListCollectionStore::new();
        let left = store.create_list("Left".to_string()).unwrap();
        let right = store.create_list("Right".to_string()).unwrap();
        let before = store.snapshot();

        store.add_item(left, "a").unwrap();
        let after = store.snapshot();

        assert!(Arc::ptr_eq(
            &before.shared_state(right).unwrap(),
            &after.shared_state(right).unwrap()
        ));
        assert!(!Arc::ptr_eq(
            &before.shared_state(left).unwrap(),
            &after.shared_state(left).unwrap()
        ));
    }

    #[test]
    fn test_version_counts_published_snapshots() {
        let mut store = ListCollectionStore::new();
        assert_eq!(store.version(), 0);
        let list_id = store.create_list("L".to_string()).unwrap();
        store.add_item(list_id, "a").unwrap();
        assert_eq!(store.version(), 2);
        let _ = store.add_item(Uuid::new_v4(), "nope");
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_sample_lists() {
        let store = ListCollectionStore::with_sample_lists().unwrap();
        let snapshot = store.snapshot();

        let titles: Vec<&str> = snapshot.lists().iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["What to learn", "What to buy"]);

        let learn = snapshot.state(snapshot.lists()[0].id).unwrap();
        let items: Vec<(&str, bool)> = learn
            .items
            .iter()
            .map(|i| (i.title.as_str(), i.is_done))
            .collect();
        assert_eq!(
            items,
            vec![("HTML&CSS", true), ("JS", true), ("ReactJS", false)]
        );
        assert!(snapshot.is_consistent());
    }
}

//! In-memory [`ItemRepository`] backed by an ordered map.
//!
//! Identifier assignment and insertion happen under the same lock, so every
//! `add` observes a unique identifier and the map never races. A poisoned lock
//! is reported as [`ItemRepositoryError::Unavailable`].

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{Item, ItemDraft, ItemId};

#[derive(Debug, Default)]
struct StoreState {
    items: BTreeMap<ItemId, Item>,
    sequence: u64,
}

impl StoreState {
    fn next_id(&mut self) -> Result<ItemId, ItemRepositoryError> {
        let next = self
            .sequence
            .checked_add(1)
            .ok_or_else(|| ItemRepositoryError::unavailable("item id sequence exhausted"))?;
        let id = ItemId::new(next)
            .map_err(|err| ItemRepositoryError::unavailable(format!("invalid item id: {err}")))?;
        self.sequence = next;
        Ok(id)
    }
}

/// Process-local item store.
///
/// # Examples
/// ```
/// use item_service::domain::ports::ItemRepository;
/// use item_service::domain::{ItemDraft, ItemName};
/// use item_service::outbound::persistence::InMemoryItemRepository;
///
/// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
/// let repo = InMemoryItemRepository::new();
/// let draft = ItemDraft::new(ItemName::new("itemA").expect("name"), Some(10_000), Some(10));
/// let item = repo.add(draft).await.expect("add succeeds");
/// assert_eq!(item.id().get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    state: Mutex<StoreState>,
}

impl InMemoryItemRepository {
    /// Create an empty store whose first identifier will be 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, ItemRepositoryError> {
        self.state
            .lock()
            .map_err(|_| ItemRepositoryError::unavailable("item store lock poisoned"))
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn add(&self, draft: ItemDraft) -> Result<Item, ItemRepositoryError> {
        let mut state = self.lock()?;
        let id = state.next_id()?;
        let item = Item::new(id, draft);
        state.items.insert(id, item.clone());
        Ok(item)
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>, ItemRepositoryError> {
        Ok(self.lock()?.items.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        Ok(self.lock()?.items.values().cloned().collect())
    }

    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, ItemRepositoryError> {
        let mut state = self.lock()?;
        let item = state
            .items
            .get_mut(&id)
            .ok_or_else(|| ItemRepositoryError::not_found(id.get()))?;
        item.apply(draft);
        Ok(item.clone())
    }

    async fn clear(&self) -> Result<(), ItemRepositoryError> {
        let mut state = self.lock()?;
        state.items.clear();
        state.sequence = 0;
        Ok(())
    }

    async fn len(&self) -> Result<usize, ItemRepositoryError> {
        Ok(self.lock()?.items.len())
    }
}

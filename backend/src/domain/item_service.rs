//! Item domain service.
//!
//! Implements the [`ItemsQuery`] and [`ItemsCommand`] driving ports on top of
//! any [`ItemRepository`], translating repository failures into domain
//! [`Error`] values.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{ItemRepository, ItemRepositoryError, ItemsCommand, ItemsQuery};
use crate::domain::{Error, Item, ItemDraft, ItemId};

/// Item service implementing the driving ports.
#[derive(Clone)]
pub struct ItemService<R> {
    repository: Arc<R>,
}

impl<R> ItemService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ItemService<R>
where
    R: ItemRepository,
{
    fn map_repository_error(error: ItemRepositoryError) -> Error {
        match error {
            ItemRepositoryError::NotFound { id } => Error::not_found(format!("item {id} not found")),
            ItemRepositoryError::Unavailable { message } => {
                Error::internal(format!("item store unavailable: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> ItemsQuery for ItemService<R>
where
    R: ItemRepository,
{
    async fn list_items(&self) -> Result<Vec<Item>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn find_item(&self, id: ItemId) -> Result<Option<Item>, Error> {
        let found = self
            .repository
            .get(id)
            .await
            .map_err(Self::map_repository_error)?;
        if found.is_none() {
            debug!(item_id = %id, "item lookup missed");
        }
        Ok(found)
    }
}

#[async_trait]
impl<R> ItemsCommand for ItemService<R>
where
    R: ItemRepository,
{
    async fn add_item(&self, draft: ItemDraft) -> Result<Item, Error> {
        let item = self
            .repository
            .add(draft)
            .await
            .map_err(Self::map_repository_error)?;
        info!(item_id = %item.id(), item_name = %item.name(), "item added");
        Ok(item)
    }

    async fn update_item(&self, id: ItemId, draft: ItemDraft) -> Result<Item, Error> {
        let item = self
            .repository
            .update(id, draft)
            .await
            .map_err(Self::map_repository_error)?;
        info!(item_id = %id, item_name = %item.name(), "item updated");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockItemRepository;
    use crate::domain::{ErrorCode, ItemName};
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn draft() -> ItemDraft {
        ItemDraft::new(
            ItemName::new("itemA").expect("valid name"),
            Some(10_000),
            Some(10),
        )
    }

    fn id(raw: u64) -> ItemId {
        ItemId::new(raw).expect("positive id")
    }

    #[rstest]
    #[tokio::test]
    async fn add_item_returns_stored_copy(draft: ItemDraft) {
        let mut repo = MockItemRepository::new();
        let stored = Item::new(id(1), draft.clone());
        let returned = stored.clone();
        repo.expect_add()
            .with(eq(draft.clone()))
            .times(1)
            .return_once(move |_| Ok(returned));

        let service = ItemService::new(Arc::new(repo));
        let item = service.add_item(draft).await.expect("add succeeds");

        assert_eq!(item, stored);
    }

    #[rstest]
    #[tokio::test]
    async fn update_item_maps_missing_id_to_not_found(draft: ItemDraft) {
        let mut repo = MockItemRepository::new();
        repo.expect_update()
            .times(1)
            .return_once(|missing, _| Err(ItemRepositoryError::not_found(missing.get())));

        let service = ItemService::new(Arc::new(repo));
        let error = service
            .update_item(id(42), draft)
            .await
            .expect_err("unknown id fails");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "item 42 not found");
    }

    #[rstest]
    #[tokio::test]
    async fn find_item_passes_through_misses() {
        let mut repo = MockItemRepository::new();
        repo.expect_get()
            .with(eq(id(3)))
            .times(1)
            .return_once(|_| Ok(None));

        let service = ItemService::new(Arc::new(repo));
        let found = service.find_item(id(3)).await.expect("lookup succeeds");

        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn unavailable_store_maps_to_internal_error() {
        let mut repo = MockItemRepository::new();
        repo.expect_list_all()
            .times(1)
            .return_once(|| Err(ItemRepositoryError::unavailable("lock poisoned")));

        let service = ItemService::new(Arc::new(repo));
        let error = service.list_items().await.expect_err("store failure");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}

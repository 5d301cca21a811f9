//! Driving port for item reads.
//!
//! HTTP handlers depend on this port rather than on the store directly.

use async_trait::async_trait;

use crate::domain::{Error, Item, ItemId};

/// Read-side item use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemsQuery: Send + Sync {
    /// Every item, ordered by identifier.
    async fn list_items(&self) -> Result<Vec<Item>, Error>;

    /// A single item, or `None` when nothing is stored under `id`.
    async fn find_item(&self, id: ItemId) -> Result<Option<Item>, Error>;
}

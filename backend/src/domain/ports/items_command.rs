//! Driving port for item mutations.

use async_trait::async_trait;

use crate::domain::{Error, Item, ItemDraft, ItemId};

/// Write-side item use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemsCommand: Send + Sync {
    /// Store a new item and return it with its assigned identifier.
    async fn add_item(&self, draft: ItemDraft) -> Result<Item, Error>;

    /// Overwrite an existing item.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when `id` is unknown.
    async fn update_item(&self, id: ItemId, draft: ItemDraft) -> Result<Item, Error>;
}

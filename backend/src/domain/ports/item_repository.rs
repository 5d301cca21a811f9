//! Driven port for item storage.
//!
//! The store owns identifier assignment: callers hand over an [`ItemDraft`]
//! and receive the stored [`Item`] with its freshly assigned [`ItemId`].

use async_trait::async_trait;

use crate::domain::{Item, ItemDraft, ItemId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by item repository adapters.
    pub enum ItemRepositoryError {
        /// No item is stored under the identifier.
        NotFound { id: u64 } => "item {id} not found",
        /// The backing store cannot serve requests.
        Unavailable { message: String } => "item store unavailable: {message}",
    }
}

/// Port for the authoritative item collection.
///
/// Identifiers start at 1, increase strictly with every `add`, and are never
/// handed out twice until [`ItemRepository::clear`] resets the sequence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Assign the next identifier, store the item and return the stored copy.
    async fn add(&self, draft: ItemDraft) -> Result<Item, ItemRepositoryError>;

    /// Fetch the current value of an item.
    async fn get(&self, id: ItemId) -> Result<Option<Item>, ItemRepositoryError>;

    /// Snapshot of every stored item in ascending identifier order.
    async fn list_all(&self) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Overwrite name, price and quantity of an existing item.
    ///
    /// Returns [`ItemRepositoryError::NotFound`] when `id` is unknown.
    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, ItemRepositoryError>;

    /// Remove every item and reset the identifier sequence to zero.
    async fn clear(&self) -> Result<(), ItemRepositoryError>;

    /// Number of stored items.
    async fn len(&self) -> Result<usize, ItemRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn not_found_message_names_the_id() {
        assert_eq!(ItemRepositoryError::not_found(9_u64).to_string(), "item 9 not found");
    }

    #[rstest]
    fn unavailable_accepts_str_messages() {
        let err = ItemRepositoryError::unavailable("lock poisoned");
        assert_eq!(err.to_string(), "item store unavailable: lock poisoned");
    }
}

//! Sample catalogue loaded at startup so a fresh server has something to show.

use tracing::info;

use crate::domain::ports::ItemsCommand;
use crate::domain::{Error, Item, ItemDraft, ItemName};

const SAMPLE_ITEMS: [(&str, i32, i32); 2] = [("itemA", 10_000, 10), ("itemB", 20_000, 20)];

/// Drafts for the built-in sample items, in insertion order.
pub fn sample_item_drafts() -> Result<Vec<ItemDraft>, Error> {
    SAMPLE_ITEMS
        .iter()
        .map(|&(name, price, quantity)| {
            let name = ItemName::new(name)
                .map_err(|err| Error::internal(format!("invalid sample item name: {err}")))?;
            Ok(ItemDraft::new(name, Some(price), Some(quantity)))
        })
        .collect()
}

/// Add every sample item through the command port.
///
/// # Errors
/// Returns the first error raised by the command port.
pub async fn seed_sample_items(command: &dyn ItemsCommand) -> Result<Vec<Item>, Error> {
    let mut seeded = Vec::with_capacity(SAMPLE_ITEMS.len());
    for draft in sample_item_drafts()? {
        seeded.push(command.add_item(draft).await?);
    }
    info!(count = seeded.len(), "sample items seeded");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;
    use crate::domain::ports::MockItemsCommand;
    use rstest::rstest;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[rstest]
    #[tokio::test]
    async fn seeds_item_a_then_item_b() {
        let next = AtomicU64::new(0);
        let mut command = MockItemsCommand::new();
        command.expect_add_item().times(2).returning(move |draft| {
            let raw = next.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Item::new(ItemId::new(raw).expect("positive id"), draft))
        });

        let seeded = seed_sample_items(&command).await.expect("seeding succeeds");

        let summary: Vec<_> = seeded
            .iter()
            .map(|item| (item.id().get(), item.name().as_str(), item.price(), item.quantity()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "itemA", Some(10_000), Some(10)),
                (2, "itemB", Some(20_000), Some(20)),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn stops_at_first_failure() {
        let mut command = MockItemsCommand::new();
        command
            .expect_add_item()
            .times(1)
            .returning(|_| Err(Error::internal("store down")));

        let error = seed_sample_items(&command).await.expect_err("seeding fails");
        assert_eq!(error.message(), "store down");
    }
}

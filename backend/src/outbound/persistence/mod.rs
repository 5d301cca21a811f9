//! Persistence adapters for the item repository port.
//!
//! Items live for the lifetime of the process only; the store is created in
//! `main` and shared with handlers through `Arc`.

mod in_memory_item_repository;

pub use in_memory_item_repository::InMemoryItemRepository;

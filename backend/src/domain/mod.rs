//! Domain primitives, ports and services.
//!
//! Purpose: define the item model and the use-cases the HTTP adapter drives,
//! independent of Actix and of how items are stored.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Item, ItemId, ItemName, ItemDraft: the item model.
//! - ItemService: driving-port implementation over an `ItemRepository`.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod item;
pub mod item_service;
pub mod ports;
pub mod sample_items;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::item::{Item, ItemDraft, ItemId, ItemName, ItemValidationError};
pub use self::item_service::ItemService;
pub use self::sample_items::{sample_item_drafts, seed_sample_items};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: process-local item storage.
//!
//! Adapters translate between domain types and their storage representation
//! and contain no business logic.

pub mod persistence;

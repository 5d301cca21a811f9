//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (implemented by outbound adapters) expose typed errors built
//! with [`define_port_error!`]; driving ports (implemented by domain services)
//! speak the domain [`Error`](crate::domain::Error).

mod macros;
pub(crate) use macros::define_port_error;

mod item_repository;
mod items_command;
mod items_query;

#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{ItemRepository, ItemRepositoryError};
#[cfg(test)]
pub use items_command::MockItemsCommand;
pub use items_command::ItemsCommand;
#[cfg(test)]
pub use items_query::MockItemsQuery;
pub use items_query::ItemsQuery;

//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` and only depend on
//! the item driving ports, so they stay testable without a real store.

use std::sync::Arc;

use crate::domain::ports::{ItemsCommand, ItemsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub items_query: Arc<dyn ItemsQuery>,
    pub items_command: Arc<dyn ItemsCommand>,
}

impl HttpState {
    /// Construct state from the query and command ports.
    pub fn new(items_query: Arc<dyn ItemsQuery>, items_command: Arc<dyn ItemsCommand>) -> Self {
        Self {
            items_query,
            items_command,
        }
    }

    /// Construct state from a single service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use item_service::domain::ItemService;
    /// use item_service::inbound::http::state::HttpState;
    /// use item_service::outbound::persistence::InMemoryItemRepository;
    ///
    /// let service = Arc::new(ItemService::new(Arc::new(InMemoryItemRepository::new())));
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ItemsQuery + ItemsCommand + 'static,
    {
        Self {
            items_query: service.clone(),
            items_command: service,
        }
    }
}

//! HTTP server configuration object and helpers.

use actix_web::web;

use crate::inbound::http::state::HttpState;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) http_state: web::Data<HttpState>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr` and serving
    /// handlers from `http_state`.
    #[must_use]
    pub fn new(bind_addr: (String, u16), http_state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state: web::Data::new(http_state),
        }
    }

    /// Return the address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.bind_addr.0.as_str(), self.bind_addr.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemService;
    use crate::outbound::persistence::InMemoryItemRepository;
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    fn bind_addr_is_exposed() {
        let service = Arc::new(ItemService::new(Arc::new(InMemoryItemRepository::new())));
        let config = ServerConfig::new(
            ("127.0.0.1".to_owned(), 0),
            HttpState::from_service(service),
        );
        assert_eq!(config.bind_addr(), ("127.0.0.1", 0));
    }
}

//! HTTP inbound adapter serving the item pages and health health checks.

pub mod error;
pub mod forms;
pub mod health;
pub mod items;
pub mod state;
pub mod validation;
pub mod views;

pub use error::HttpResult;

//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::Trace;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::items;
use crate::inbound::http::state::HttpState;

/// Assemble the application: shared state, the trace middleware, item pages,
/// and health checks.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(items::configure)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Actix signal handling is disabled; callers stop the server through
/// [`shut_down`] so liveness fails before connections drain.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        http_state,
    } = config;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .disable_signals()
    .bind(bind_addr.clone())?
    .run();

    info!(host = %bind_addr.0, port = bind_addr.1, "listening");
    health_state.mark_ready();
    Ok(server)
}

/// Fail the liveness check, then stop accepting connections and wait for
/// in-flight requests to finish.
pub async fn shut_down(health_state: &HealthState, handle: ServerHandle) {
    health_state.mark_unhealthy();
    info!("shutting down");
    handle.stop(true).await;
}

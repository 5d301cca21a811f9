//! Health endpoints: liveness and readiness health checks for orchestrators.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Readiness and liveness flags shared with the health handlers.
#[derive(Debug)]
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Start live but not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready once the listener is bound and sample data
    /// has been loaded.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness so orchestrators stop routing during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn status_response(healthy: bool) -> HttpResponse {
        let mut response = if healthy {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness check: 200 once the server can take traffic, 503 before.
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::status_response(state.is_ready())
}

/// Liveness check: 200 while alive, 503 once draining.
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::status_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    async fn check(state: web::Data<HealthState>, uri: &str) -> (StatusCode, Option<String>) {
        let app = test::init_service(App::new().app_data(state).service(ready).service(live)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let cache = res
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        (res.status(), cache)
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_flips_after_mark_ready() {
        let state = web::Data::new(HealthState::new());
        let (before, _) = check(state.clone(), "/health/ready").await;
        state.mark_ready();
        let (after, cache) = check(state, "/health/ready").await;

        assert_eq!(before, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(after, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some("no-store"));
    }

    #[rstest]
    #[actix_web::test]
    async fn liveness_fails_once_unhealthy() {
        let state = web::Data::new(HealthState::new());
        let (before, _) = check(state.clone(), "/health/live").await;
        state.mark_unhealthy();
        let (after, _) = check(state, "/health/live").await;

        assert_eq!(before, StatusCode::OK);
        assert_eq!(after, StatusCode::SERVICE_UNAVAILABLE);
    }
}

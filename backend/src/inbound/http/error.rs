//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting handlers
//! return it with `?`. Failures are rendered as HTML error pages with a status
//! derived from the error code.

use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

use super::views;

/// Convenient result alias for HTTP handlers.
pub type HttpResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(error: &Error) -> &str {
    if matches!(error.code(), ErrorCode::InternalError) {
        REDACTED_MESSAGE
    } else {
        error.message()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, trace_id = ?self.trace_id(), "request failed");
        }
        let mut response = views::html(status, views::error_page(status, public_message(self)));
        if let Some(id) = self.trace_id() {
            if let Ok(value) = HeaderValue::from_str(id) {
                response
                    .headers_mut()
                    .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    async fn body_text(response: HttpResponse) -> String {
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        String::from_utf8(bytes.to_vec()).expect("utf8 body")
    }

    #[rstest]
    #[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(ResponseError::status_code(&error), expected);
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let error = Error::internal("lock poisoned at store.rs:42").with_trace_id(TRACE_ID);
        let response = ResponseError::error_response(&error);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some(TRACE_ID)
        );
        let body = body_text(response).await;
        assert!(body.contains(REDACTED_MESSAGE));
        assert!(!body.contains("lock poisoned"));
    }

    #[actix_web::test]
    async fn client_errors_keep_their_message_and_omit_missing_trace_id() {
        let response = ResponseError::error_response(&Error::not_found("item 9 not found"));

        assert!(response.headers().get(TRACE_ID_HEADER).is_none());
        let body = body_text(response).await;
        assert!(body.contains("item 9 not found"));
    }
}

//! Request guarding
//!
//! Two layers wrap every route, the fallback included:
//! - [`error_pages`] swaps the plain-text body of a 404/500 [`PageError`]
//!   response for the rendered error page.
//! - [`panic_response`] backs `CatchPanicLayer`, turning a panic anywhere
//!   below it (handlers, renderer, error pages) into a plain-text 500.
//!
//! [`PageError`]: crate::error::PageError

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use std::any::Any;
use tracing::{error, warn};

use crate::error::ErrorPage;
use crate::render::{PageData, Template};
use crate::AppState;

const PANIC_BODY: &str = "Internal server error";

/// Render error pages for classified 404 and 500 responses
///
/// 400 responses keep their plain-text body. If the error page itself fails
/// to render, the plain-text response goes out unchanged.
pub async fn error_pages(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let status = response.status();
    if status != StatusCode::NOT_FOUND && status != StatusCode::INTERNAL_SERVER_ERROR {
        return response;
    }
    let Some(page) = response.extensions().get::<ErrorPage>() else {
        return response;
    };

    let data = PageData::Error {
        status: status.as_u16(),
        message: &page.message,
    };
    match state.renderer.render(Template::Error, &data) {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            warn!(status = status.as_u16(), error = %e, "Error page render failed, sending plain text");
            response
        }
    }
}

/// Response for a panic caught by `CatchPanicLayer`
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(panic = %detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        PANIC_BODY,
    )
        .into_response()
}

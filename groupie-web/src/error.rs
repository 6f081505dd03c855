//! Error types for groupie-web request handling
//!
//! Every request-time failure is classified into one of these variants and
//! answered without affecting other requests.

use crate::render::RenderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request outcome other than success
#[derive(Debug, Error)]
pub enum PageError {
    /// Identifier missing, non-numeric or non-positive (400)
    #[error("{0}")]
    BadRequest(String),

    /// Valid identifier with no matching record, or unknown path (404)
    #[error("{0}")]
    NotFound(String),

    /// Renderer failed to produce the page (500)
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Internal server error (500)
    #[error("{0}")]
    Internal(String),
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::Render(_) | PageError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the client; render details stay in the log
    pub fn public_message(&self) -> String {
        match self {
            PageError::Render(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Marker left on error responses so the error-page middleware can replace
/// the plain-text body with a rendered page
#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub message: String,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let message = self.public_message();
        let mut response = (status, message.clone()).into_response();
        response.extensions_mut().insert(ErrorPage { message });
        response
    }
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;

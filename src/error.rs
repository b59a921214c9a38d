//! Defines the app level error type and conversions to rendered HTML pages.
use axum::response::{IntoResponse, Response};

use crate::{internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested page does not exist.
    ///
    /// For the listing page this means the page number was outside of
    /// `[1, total_pages]`.
    #[error("the requested page could not be found")]
    NotFound,

    /// The base URL for page links must be an absolute path, e.g. "/items".
    #[error("invalid base URL \"{0}\", it must start with '/'")]
    InvalidBaseUrl(String),

    /// The path segment before the page number must be a single, non-empty segment.
    #[error("invalid slug ordering segment \"{0}\", it must be non-empty and not contain '/'")]
    InvalidSlugOrderingSegment(String),

    /// Pages must hold at least one item and at most [crate::app_state::MAX_PAGE_SIZE].
    #[error("the page size must be between 1 and {}", crate::app_state::MAX_PAGE_SIZE)]
    InvalidPageSize,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

//! Pagination controls for server-rendered HTML.
//!
//! Given the current page, the number of pages and the URL scheme of the host
//! page, [Paginator] renders back and next links around a small window of page
//! links, e.g. `‹ 1 ... 4 ... 9 ›`. The window is chosen by
//! [select_page_window] and never shows more than five entries.
//!
//! The library also provides a small web app that serves a paged listing with
//! the pagination controls, see [build_router].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod button;
mod class_names;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod listing_page;
mod logging;
mod not_found;
mod pagination;
mod paginator;
mod routing;

#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, ListingConfig};
pub use button::{AnchorButton, Button, Link};
pub use class_names::combine_class_names;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::{
    ELLIPSIS, PageToken, PaginationIndicator, PaginationState, create_pagination_indicators,
    format_page_url, select_page_window,
};
pub use paginator::{PAGINATOR_CLASS, Paginator, paginator_view};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

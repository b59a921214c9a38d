use std::{error::Error, net::SocketAddr};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paginator_rs::{AppState, ListingConfig, build_router, graceful_shutdown};

/// Serves a paged listing with pagination controls.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The path prefix for the listing, e.g. "/items".
    #[arg(long, default_value = "/items")]
    base_url: String,

    /// The path segment between the base URL and the page number.
    #[arg(long, default_value = "p")]
    slug_ordering_segment: String,

    /// The number of items in the listing.
    #[arg(long, default_value_t = 95)]
    item_count: u64,

    /// The maximum number of items per page, from 1 to 1000.
    #[arg(long, default_value_t = 10)]
    page_size: u64,
}

impl From<Args> for ListingConfig {
    fn from(args: Args) -> Self {
        Self {
            base_url: args.base_url,
            slug_ordering_segment: args.slug_ordering_segment,
            item_count: args.item_count,
            page_size: args.page_size,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();
    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let state = AppState::new(args.into())
        .inspect_err(|error| tracing::error!("Invalid listing config: {error}"))?;
    let first_page = paginator_rs::format_page_url(
        &state.listing_config.base_url,
        &state.listing_config.slug_ordering_segment,
        1,
    );

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on http://{addr}{first_page}");
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}

//! Application router configuration.

use axum::{Router, middleware, routing::get};

use crate::{
    AppState, endpoints,
    listing_page::{get_listing_page, redirect_to_first_page},
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// The listing is mounted under the configured base URL. Both the root and
/// the bare base URL redirect to the first page.
pub fn build_router(state: AppState) -> Router {
    let config = &state.listing_config;
    let listing_route =
        endpoints::format_listing_route(&config.base_url, &config.slug_ordering_segment);

    let mut router = Router::new()
        .route(endpoints::ROOT, get(redirect_to_first_page))
        .route(&listing_route, get(get_listing_page));

    if !config.base_url.is_empty() {
        router = router.route(&config.base_url, get(redirect_to_first_page));
    }

    router
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

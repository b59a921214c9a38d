//! The URIs the host app serves.
//!
//! The listing routes depend on the configured base URL, use
//! [format_listing_route] to build them.

/// The root route which redirects to the first page of the listing.
pub const ROOT: &str = "/";

/// The name of the path parameter holding the page number.
pub const PAGE_NUMBER_PARAM: &str = "page_number";

/// The route for a single page of the listing, e.g. "/items/p/{page_number}".
pub fn format_listing_route(base_url: &str, slug_ordering_segment: &str) -> String {
    format!("{base_url}/{slug_ordering_segment}/{{{PAGE_NUMBER_PARAM}}}")
}

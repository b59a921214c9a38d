//! Implements a struct that holds the state of the web server.

use crate::Error;

/// The largest page size the listing accepts.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Characters the router reads as path parameters or wildcards.
const ROUTE_SYNTAX: [char; 3] = ['{', '}', '*'];

/// The config for the paged listing served by the host app.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingConfig {
    /// The path prefix for the listing, e.g. "/items". "/" mounts the listing at the root.
    pub base_url: String,
    /// The path segment before the page number, e.g. "p" gives "/items/p/2".
    pub slug_ordering_segment: String,
    /// The number of items in the listing.
    pub item_count: u64,
    /// The maximum number of items to show per page.
    pub page_size: u64,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_url: "/items".to_owned(),
            slug_ordering_segment: "p".to_owned(),
            item_count: 95,
            page_size: 10,
        }
    }
}

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The validated listing config. `base_url` has no trailing '/'.
    pub listing_config: ListingConfig,
}

impl AppState {
    /// Create a new [AppState] from a listing config.
    ///
    /// # Errors
    /// Returns an error if the base URL is not an absolute path, the slug
    /// ordering segment is empty or has a '/', either of them has '{', '}' or
    /// '*', or the page size is not in `1..=MAX_PAGE_SIZE`.
    pub fn new(listing_config: ListingConfig) -> Result<Self, Error> {
        let base_url = normalize_base_url(&listing_config.base_url)?;

        let segment = &listing_config.slug_ordering_segment;
        if segment.is_empty() || segment.contains('/') || segment.contains(ROUTE_SYNTAX) {
            return Err(Error::InvalidSlugOrderingSegment(segment.clone()));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&listing_config.page_size) {
            return Err(Error::InvalidPageSize);
        }

        Ok(Self {
            listing_config: ListingConfig {
                base_url,
                ..listing_config
            },
        })
    }

    /// The number of pages needed to show every item. Zero when there are no items.
    pub fn total_pages(&self) -> u64 {
        self.listing_config
            .item_count
            .div_ceil(self.listing_config.page_size)
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, Error> {
    if !base_url.starts_with('/') || base_url.contains(ROUTE_SYNTAX) {
        return Err(Error::InvalidBaseUrl(base_url.to_owned()));
    }

    Ok(base_url.trim_end_matches('/').to_owned())
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        app_state::{AppState, ListingConfig, MAX_PAGE_SIZE},
    };

    fn config(base_url: &str, slug_ordering_segment: &str) -> ListingConfig {
        ListingConfig {
            base_url: base_url.to_owned(),
            slug_ordering_segment: slug_ordering_segment.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_default_config() {
        let state = AppState::new(ListingConfig::default()).unwrap();

        assert_eq!(ListingConfig::default(), state.listing_config);
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let state = AppState::new(config("/items/", "p")).unwrap();

        assert_eq!("/items", state.listing_config.base_url);
    }

    #[test]
    fn root_base_url_becomes_empty_prefix() {
        let state = AppState::new(config("/", "p")).unwrap();

        assert_eq!("", state.listing_config.base_url);
    }

    #[test]
    fn rejects_relative_base_url() {
        let result = AppState::new(config("items", "p"));

        assert_eq!(Err(Error::InvalidBaseUrl("items".to_owned())), result.map(|_| ()));
    }

    #[test]
    fn rejects_empty_segment() {
        let result = AppState::new(config("/items", ""));

        assert_eq!(
            Err(Error::InvalidSlugOrderingSegment("".to_owned())),
            result.map(|_| ())
        );
    }

    #[test]
    fn rejects_segment_with_slash() {
        let result = AppState::new(config("/items", "a/p"));

        assert_eq!(
            Err(Error::InvalidSlugOrderingSegment("a/p".to_owned())),
            result.map(|_| ())
        );
    }

    #[test]
    fn rejects_base_url_with_route_parameter() {
        for base_url in ["/a{", "/a}", "/{id}"] {
            let result = AppState::new(config(base_url, "p"));

            assert_eq!(
                Err(Error::InvalidBaseUrl(base_url.to_owned())),
                result.map(|_| ())
            );
        }
    }

    #[test]
    fn rejects_base_url_with_wildcard() {
        let result = AppState::new(config("/items/*rest", "p"));

        assert_eq!(
            Err(Error::InvalidBaseUrl("/items/*rest".to_owned())),
            result.map(|_| ())
        );
    }

    #[test]
    fn rejects_segment_with_route_parameter() {
        for segment in ["{", "}", "{page}"] {
            let result = AppState::new(config("/items", segment));

            assert_eq!(
                Err(Error::InvalidSlugOrderingSegment(segment.to_owned())),
                result.map(|_| ())
            );
        }
    }

    #[test]
    fn rejects_segment_with_wildcard() {
        let result = AppState::new(config("/items", "*p"));

        assert_eq!(
            Err(Error::InvalidSlugOrderingSegment("*p".to_owned())),
            result.map(|_| ())
        );
    }

    #[test]
    fn validated_config_builds_router() {
        let state = AppState::new(config("/blog/posts/", "page")).unwrap();

        // Panics on invalid route syntax.
        let _router = crate::build_router(state);
    }

    #[test]
    fn rejects_page_size_over_limit() {
        let result = AppState::new(ListingConfig {
            page_size: MAX_PAGE_SIZE + 1,
            ..Default::default()
        });

        assert_eq!(Err(Error::InvalidPageSize), result.map(|_| ()));
    }

    #[test]
    fn accepts_page_size_at_limit() {
        let result = AppState::new(ListingConfig {
            page_size: MAX_PAGE_SIZE,
            ..Default::default()
        });

        assert!(result.is_ok());
    }

    #[test]
    fn rejects_zero_page_size() {
        let result = AppState::new(ListingConfig {
            page_size: 0,
            ..Default::default()
        });

        assert_eq!(Err(Error::InvalidPageSize), result.map(|_| ()));
    }

    #[test]
    fn counts_partial_last_page() {
        let state = AppState::new(ListingConfig {
            item_count: 95,
            page_size: 10,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(10, state.total_pages());
    }

    #[test]
    fn counts_no_pages_for_no_items() {
        let state = AppState::new(ListingConfig {
            item_count: 0,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(0, state.total_pages());
    }
}

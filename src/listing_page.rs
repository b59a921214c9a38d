//! The paged listing that hosts the pagination controls.

use std::ops::RangeInclusive;

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    html::{
        LIST_ITEM_STYLE, LIST_STYLE, MUTED_TEXT_STYLE, PAGE_CONTAINER_STYLE, PAGE_HEADER_STYLE,
        base,
    },
    pagination::{PaginationState, format_page_url},
    paginator::Paginator,
};

/// The state needed for the listing page.
#[derive(Debug, Clone)]
pub struct ListingPageState {
    pub base_url: String,
    pub slug_ordering_segment: String,
    pub item_count: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl FromRef<AppState> for ListingPageState {
    fn from_ref(state: &AppState) -> Self {
        let config = &state.listing_config;

        Self {
            base_url: config.base_url.clone(),
            slug_ordering_segment: config.slug_ordering_segment.clone(),
            item_count: config.item_count,
            page_size: config.page_size,
            total_pages: state.total_pages(),
        }
    }
}

impl ListingPageState {
    fn page_url(&self, page: u64) -> String {
        format_page_url(&self.base_url, &self.slug_ordering_segment, page)
    }

    /// The 1-indexed item numbers on `page`, or `None` if the page is out of range.
    ///
    /// An empty listing still has a first page.
    fn items_on_page(&self, page: u64) -> Option<RangeInclusive<u64>> {
        let last_page = self.total_pages.max(1);

        if page == 0 || page > last_page {
            return None;
        }

        let first_item = (page - 1) * self.page_size + 1;
        let last_item = page.saturating_mul(self.page_size).min(self.item_count);

        Some(first_item..=last_item)
    }
}

/// Redirect to the first page of the listing.
pub async fn redirect_to_first_page(State(state): State<ListingPageState>) -> Redirect {
    Redirect::to(&state.page_url(1))
}

/// Render a single page of the listing with the pagination controls below it.
pub async fn get_listing_page(
    State(state): State<ListingPageState>,
    Path(page_number): Path<u64>,
) -> Result<Response, Error> {
    let items = state.items_on_page(page_number).ok_or_else(|| {
        tracing::debug!(
            "page {page_number} is outside of the listing's {} pages",
            state.total_pages
        );
        Error::NotFound
    })?;

    let pagination = PaginationState::new(
        page_number,
        state.total_pages,
        state.base_url.clone(),
        state.slug_ordering_segment.clone(),
    );

    Ok(listing_view(&pagination, items).into_response())
}

fn listing_view(pagination: &PaginationState, items: RangeInclusive<u64>) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            header class=(PAGE_HEADER_STYLE)
            {
                h1 { "Items" }

                @if pagination.is_paginated() {
                    p class=(MUTED_TEXT_STYLE)
                    {
                        "Page " (pagination.page_number) " of " (pagination.total_pages)
                    }
                }
            }

            @if items.is_empty() {
                p class=(MUTED_TEXT_STYLE) { "No items yet." }
            } @else {
                ul class=(LIST_STYLE)
                {
                    @for item in items {
                        li class=(LIST_ITEM_STYLE) data-item=(item) { "Item " (item) }
                    }
                }
            }

            (Paginator::new(pagination))
        }
    );

    base("Items", &content)
}

//! This modules defines the page-window selection for pagination controls.
//!
//! The functions here only decide *what* to show. Turning the result into HTML
//! is done by [crate::paginator].

use serde::{Deserialize, Serialize};

/// The text shown in place of the pages skipped by the page window.
pub const ELLIPSIS: &str = "...";

/// The paging state a host page passes to the pagination controls on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// The current page. Starts from 1.
    pub page_number: u64,
    /// The number of pages in total.
    pub total_pages: u64,
    /// The path prefix for page links, e.g. "/blog".
    pub base_url: String,
    /// The path segment inserted between `base_url` and the page number, e.g. "page".
    pub slug_ordering_segment: String,
}

impl PaginationState {
    /// Create the paging state for `page_number` out of `total_pages`.
    pub fn new(
        page_number: u64,
        total_pages: u64,
        base_url: impl Into<String>,
        slug_ordering_segment: impl Into<String>,
    ) -> Self {
        Self {
            page_number,
            total_pages,
            base_url: base_url.into(),
            slug_ordering_segment: slug_ordering_segment.into(),
        }
    }

    /// The link target for `page`.
    pub fn page_url(&self, page: u64) -> String {
        format_page_url(&self.base_url, &self.slug_ordering_segment, page)
    }

    /// Whether there is anything to paginate, i.e. more than one page.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    /// The current page clamped to `[1, total_pages]`.
    ///
    /// Returns `None` when there are no pages at all.
    pub fn current_page(&self) -> Option<u64> {
        clamp_page_number(self.page_number, self.total_pages)
    }
}

/// Format the link to `page` as `{base_url}/{slug_ordering_segment}/{page}`.
///
/// The output must match the host's routes byte for byte, so no normalisation
/// of slashes is done here.
pub fn format_page_url(base_url: &str, slug_ordering_segment: &str, page: u64) -> String {
    format!("{base_url}/{slug_ordering_segment}/{page}")
}

/// An entry in the page window: either a page number or a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A page number.
    Page(u64),
    /// One or more skipped pages.
    Ellipsis,
}

/// Select which page numbers and gaps to show for `page_number` out of `total_pages`.
///
/// Returns an empty window when `total_pages <= 1`. Otherwise the window
/// always starts at page 1, ends at `total_pages` and never holds more than
/// five tokens:
///
/// - three pages or fewer: every page
/// - on page 1 or 2: `1, 2, ..., N`
/// - within two pages of the end: `1, ..., N-1, N`
/// - anywhere else: `1, ..., page, ..., N`
///
/// Note that four pages on page 2 gives `1, 2, ..., 4` rather than all four
/// pages.
///
/// `page_number` is clamped into `[1, total_pages]` first.
pub fn select_page_window(page_number: u64, total_pages: u64) -> Vec<PageToken> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let page_number = match clamp_page_number(page_number, total_pages) {
        Some(page_number) => page_number,
        None => return Vec::new(),
    };

    if total_pages <= 3 {
        (1..=total_pages).map(PageToken::Page).collect()
    } else if page_number <= 2 {
        vec![
            PageToken::Page(1),
            PageToken::Page(2),
            PageToken::Ellipsis,
            PageToken::Page(total_pages),
        ]
    } else if total_pages - page_number <= 2 {
        vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(total_pages - 1),
            PageToken::Page(total_pages),
        ]
    } else {
        vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(page_number),
            PageToken::Ellipsis,
            PageToken::Page(total_pages),
        ]
    }
}

fn clamp_page_number(page_number: u64, total_pages: u64) -> Option<u64> {
    if total_pages == 0 {
        return None;
    }

    let clamped = page_number.clamp(1, total_pages);

    if clamped != page_number {
        tracing::warn!(
            "page number {page_number} is outside of [1, {total_pages}], using {clamped} instead"
        );
    }

    Some(clamped)
}

/// A single control in the rendered pagination controls, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum PaginationIndicator {
    /// Link to the previous page.
    BackButton { page: u64, url: String },
    /// Link to a page other than the current one.
    Page { page: u64, url: String },
    /// The current page, which is not a link.
    CurrPage(u64),
    Ellipsis,
    /// Link to the next page.
    NextButton { page: u64, url: String },
}

/// Build the full list of pagination controls for `state`.
///
/// This is the page window from [select_page_window] with the current page
/// marked, every other page resolved to its link, and the back and next
/// buttons added where there is a page to go to.
pub fn create_pagination_indicators(state: &PaginationState) -> Vec<PaginationIndicator> {
    if !state.is_paginated() {
        return Vec::new();
    }

    let curr_page = match state.current_page() {
        Some(page) => page,
        None => return Vec::new(),
    };
    let tokens = select_page_window(curr_page, state.total_pages);

    let mut indicators = Vec::with_capacity(tokens.len() + 2);

    if curr_page > 1 {
        indicators.push(PaginationIndicator::BackButton {
            page: curr_page - 1,
            url: state.page_url(curr_page - 1),
        });
    }

    indicators.extend(tokens.into_iter().map(|token| match token {
        PageToken::Page(page) if page == curr_page => PaginationIndicator::CurrPage(page),
        PageToken::Page(page) => PaginationIndicator::Page {
            page,
            url: state.page_url(page),
        },
        PageToken::Ellipsis => PaginationIndicator::Ellipsis,
    }));

    if curr_page < state.total_pages {
        indicators.push(PaginationIndicator::NextButton {
            page: curr_page + 1,
            url: state.page_url(curr_page + 1),
        });
    }

    indicators
}

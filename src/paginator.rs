//! Renders the pagination controls as HTML.

use maud::{Markup, Render, html};

use crate::{
    button::{AnchorButton, Button},
    class_names::combine_class_names,
    pagination::{ELLIPSIS, PaginationIndicator, PaginationState, create_pagination_indicators},
};

/// The class of the element wrapping the pagination controls.
pub const PAGINATOR_CLASS: &str = "paginator";

/// Content for the icon-only back and next buttons so they are never empty.
const ZERO_WIDTH_SPACE: &str = "\u{200b}";

const PREVIOUS_PAGE_CLASS: &str = "previous-page icon icon-chevron-left";
const NEXT_PAGE_CLASS: &str = "next-page icon icon-chevron-right";
const CURRENT_PAGE_CLASS: &str = "current-page";
const SEPARATOR_CLASS: &str = "paginator-separator";

/// Pagination controls: back, a window of pages, next.
///
/// Renders to nothing when there is only one page or none.
///
/// ```ignore
/// let state = PaginationState::new(3, 5, "/blog", "page");
/// let markup = html!( (Paginator::new(&state).class_name("mt-4")) );
/// ```
#[derive(Debug, Clone)]
pub struct Paginator<'a> {
    state: &'a PaginationState,
    class_name: Option<&'a str>,
}

impl<'a> Paginator<'a> {
    /// Pagination controls for `state`.
    pub fn new(state: &'a PaginationState) -> Self {
        Self {
            state,
            class_name: None,
        }
    }

    /// Add extra classes on top of [PAGINATOR_CLASS].
    pub fn class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = Some(class_name);
        self
    }
}

impl Render for Paginator<'_> {
    fn render(&self) -> Markup {
        paginator_view(self.state, self.class_name)
    }
}

/// Render the pagination controls for `state`, see [Paginator].
pub fn paginator_view(state: &PaginationState, class_name: Option<&str>) -> Markup {
    let indicators = create_pagination_indicators(state);

    if indicators.is_empty() {
        return html!();
    }

    let class = combine_class_names([Some(PAGINATOR_CLASS), class_name]);

    html!(
        div class=(class)
        {
            @for indicator in &indicators {
                (indicator_view(indicator))
            }
        }
    )
}

fn indicator_view(indicator: &PaginationIndicator) -> Markup {
    match indicator {
        PaginationIndicator::BackButton { url, .. } => AnchorButton::internal(url)
            .class_name(PREVIOUS_PAGE_CLASS)
            .aria_label("Previous page")
            .into_html(html!((ZERO_WIDTH_SPACE))),
        PaginationIndicator::Page { page, url } => {
            AnchorButton::internal(url).into_html(html!((page)))
        }
        PaginationIndicator::CurrPage(page) => Button::new()
            .class_name(CURRENT_PAGE_CLASS)
            .current_page()
            .into_html(html!((page))),
        PaginationIndicator::Ellipsis => html!(
            span class=(SEPARATOR_CLASS) { (ELLIPSIS) }
        ),
        PaginationIndicator::NextButton { url, .. } => AnchorButton::internal(url)
            .class_name(NEXT_PAGE_CLASS)
            .aria_label("Next page")
            .into_html(html!((ZERO_WIDTH_SPACE))),
    }
}

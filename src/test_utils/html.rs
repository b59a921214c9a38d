use axum::{body::Body, response::Response};
use maud::Markup;
use scraper::{ElementRef, Html, Selector};

/// Parse a full page from a handler's response body.
pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    Html::parse_document(&String::from_utf8_lossy(&body))
}

/// Parse markup that is rendered inside a page, e.g. a single control.
pub(crate) fn parse_html_fragment(markup: Markup) -> Html {
    Html::parse_fragment(&markup.into_string())
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The first element matching `selector`, panicking with the markup if there is none.
#[track_caller]
pub(crate) fn must_select<'a>(html: &'a Html, selector: &str) -> ElementRef<'a> {
    html.select(&Selector::parse(selector).expect("Invalid selector"))
        .next()
        .unwrap_or_else(|| panic!("Could not find {selector} in {}", html.html()))
}

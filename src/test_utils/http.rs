use axum::{body::Body, http::StatusCode, response::Response};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(StatusCode::OK, response.status());
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    assert_eq!(content_type, get_header(response, "content-type"));
}

/// Assert that `response` sends the browser to `location` with a GET.
#[track_caller]
pub(crate) fn assert_redirect(response: &Response<Body>, location: &str) {
    assert_eq!(StatusCode::SEE_OTHER, response.status());
    assert_eq!(location, get_header(response, "location"));
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    response
        .headers()
        .get(header_name)
        .unwrap_or_else(|| panic!("Headers missing {header_name}"))
        .to_str()
        .expect("Could not convert header to str")
        .to_owned()
}

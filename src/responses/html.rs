use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_builder()
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// For routes that answer htmx requests with a fragment and everyone else with a page.
pub fn htmx_aware_response(markup: Markup) -> ResultResp {
    html_builder()
        .header("Vary", "HX-Request")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

fn html_builder() -> ResponseBuilder {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
}

// responses/static_files.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::path::{Component, Path};
use tracing::debug;

/// Serve `relative` from inside `root`. Anything that could leave `root` is a 404.
pub fn static_file_response(root: &Path, relative: &str) -> ResultResp {
    let rel = Path::new(relative);
    if relative.is_empty() || !rel.components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(ServerError::NotFound);
    }

    let path = root.join(rel);
    let bytes = std::fs::read(&path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "Static file not served");
        ServerError::NotFound
    })?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type(rel).as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

fn content_type(path: &Path) -> Mime {
    match path.extension().and_then(|e| e.to_str()) {
        Some("svg") => mime::IMAGE_SVG,
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some("png") => mime::IMAGE_PNG,
        Some("json") => mime::APPLICATION_JSON,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

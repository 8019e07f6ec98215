// responses/download.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// `mime` has no constant for Office Open XML workbooks.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Serve `bytes` as an attachment saved under `filename`.
///
/// The name is cut down to printable ASCII without quotes or backslashes so it can sit
/// inside the quoted `filename=` parameter as is.
pub fn download_response(bytes: Vec<u8>, content_type: &str, filename: &str) -> ResultResp {
    let disposition = format!("attachment; filename=\"{}\"", quotable(filename));

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", bytes.len())
        .header("Content-Disposition", disposition)
        .header("Cache-Control", "no-store")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

fn quotable(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| (c.is_ascii_graphic() || *c == ' ') && !matches!(c, '"' | '\\'))
        .collect()
}

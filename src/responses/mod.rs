pub mod download;
pub mod html;
pub mod static_files;

pub use crate::errors::ResultResp;

pub use download::{download_response, XLSX_CONTENT_TYPE};

// Normal HTML response
pub use html::{html_response, htmx_aware_response};
pub use static_files::static_file_response;

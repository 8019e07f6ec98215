// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors a request handler can end in. Each one becomes an HTML error page.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed: {0}")]
    MethodNotAllowed(String),
    #[error("Project data unavailable: {0}")]
    Unavailable(String),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed(_) => 405,
            ServerError::Unavailable(_) => 503,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

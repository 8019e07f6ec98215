use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Sheets API returned {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Could not read {path}: {message}")]
    Io { path: String, message: String },
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Bad sheet URL: {0}")]
    Url(String),
    #[error("Sheet has no header row")]
    Empty,
    #[error("Sheet is missing the {0:?} column")]
    MissingColumn(&'static str),
    #[error("Row {row}: unknown status {value:?}")]
    UnknownStatus { row: usize, value: String },
}

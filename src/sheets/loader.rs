// loader.rs
use crate::config::SheetSource;
use crate::sheets::SheetsError;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

const USER_AGENT: &str = concat!("project_tracker/", env!("CARGO_PKG_VERSION"));

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`. Only `values` is used.
#[derive(Debug, Default, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    #[cfg(test)]
    pub fn from_rows(rows: &[&[&str]]) -> Self {
        Self {
            range: None,
            values: rows
                .iter()
                .map(|row| row.iter().map(|cell| Value::from(*cell)).collect())
                .collect(),
        }
    }

    /// Cell text as the sheet would display it. Missing cells read as empty.
    pub fn cell(&self, row: usize, col: usize) -> String {
        match self.values.get(row).and_then(|r| r.get(col)) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

pub struct SheetLoader {
    client: Client,
    api_base: String,
}

impl SheetLoader {
    pub fn new(timeout: Duration) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(network_error)?;

        Ok(Self {
            client,
            api_base: SHEETS_API_BASE.to_string(),
        })
    }

    #[cfg(test)]
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.to_string();
        self
    }

    pub fn load(&self, source: &SheetSource) -> Result<ValueRange, SheetsError> {
        match source {
            SheetSource::File(path) => {
                info!(path = %path.display(), "Reading projects from file");
                let text = std::fs::read_to_string(path).map_err(|e| SheetsError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                parse_value_range(&text)
            }
            SheetSource::GoogleSheet {
                sheet_id,
                range,
                api_key,
            } => {
                info!(sheet_id = %sheet_id, range = %range, "Fetching projects sheet");
                self.fetch_sheet(&sheet_values_url(&self.api_base, sheet_id, range, api_key)?)
            }
        }
    }

    fn fetch_sheet(&self, url: &Url) -> Result<ValueRange, SheetsError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(network_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(SheetsError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().map_err(network_error)?;
        let range = parse_value_range(&text)?;
        debug!(
            range = ?range.range,
            rows = range.values.len(),
            "Sheet response received"
        );
        Ok(range)
    }
}

/// The request URL carries the API key, so it never goes into the message.
fn network_error(e: reqwest::Error) -> SheetsError {
    SheetsError::Network(e.without_url().to_string())
}

pub fn parse_value_range(text: &str) -> Result<ValueRange, SheetsError> {
    serde_json::from_str(text).map_err(|e| SheetsError::JsonParse(e.to_string()))
}

/// Build the values URL. The key goes in the query string, the range is a path segment.
pub fn sheet_values_url(
    api_base: &str,
    sheet_id: &str,
    range: &str,
    api_key: &str,
) -> Result<Url, SheetsError> {
    let mut url = Url::parse(api_base).map_err(|e| SheetsError::Url(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| SheetsError::Url(api_base.to_string()))?
        .push(sheet_id)
        .push("values")
        .push(range);
    url.query_pairs_mut().append_pair("key", api_key);
    Ok(url)
}

// src/domain/project.rs

use crate::domain::status::Status;
use url::Url;

/// Placeholder values the sheet uses for "not known yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    Unannounced,
    NotApplicable,
    Unknown,
}

impl Sentinel {
    /// Removal order matters: "Unannounced" goes before "?" so the two never interact.
    pub const ALL: [Sentinel; 3] = [
        Sentinel::Unannounced,
        Sentinel::NotApplicable,
        Sentinel::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sentinel::Unannounced => "Unannounced",
            Sentinel::NotApplicable => "N/A",
            Sentinel::Unknown => "?",
        }
    }
}

/// One row of the projects sheet. Built once at load time and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub section: Option<String>,
    pub status: Status,
    pub completion_date: String,
    pub city_or_neighborhood: String,
    pub owners: Vec<String>,
    pub designer: String,
    pub constructor: String,
    pub construction_start_date: String,
    pub contacts: String,
    pub website: Option<String>,
}

impl Project {
    pub fn heading(&self) -> String {
        match &self.section {
            Some(section) => format!("{} – {}", self.title, section),
            None => self.title.clone(),
        }
    }

    /// The external link, unless the sheet says "N/A". Only http(s) URLs are linked.
    pub fn link(&self) -> Option<&str> {
        self.website
            .as_deref()
            .filter(|url| *url != Sentinel::NotApplicable.as_str())
            .filter(|url| {
                Url::parse(url)
                    .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
                    .unwrap_or(false)
            })
    }

    /// Completion date with the first occurrence of each sentinel cut out.
    ///
    /// This is plain substring removal: "2025 Unannounced" becomes "2025 ", and a
    /// "?" anywhere in the text is dropped too.
    pub fn display_completion_date(&self) -> String {
        Sentinel::ALL
            .iter()
            .fold(self.completion_date.clone(), |date, sentinel| {
                date.replacen(sentinel.as_str(), "", 1)
            })
    }

    pub fn owners_display(&self) -> String {
        self.owners.join("; ")
    }
}

#[cfg(test)]
pub(crate) fn sample_project(title: &str, status: Status, location: &str) -> Project {
    Project {
        title: title.to_string(),
        section: None,
        status,
        completion_date: String::new(),
        city_or_neighborhood: location.to_string(),
        owners: vec!["MassDOT".to_string()],
        designer: "Unknown".to_string(),
        constructor: "Unknown".to_string(),
        construction_start_date: "2024".to_string(),
        contacts: "someone@example.org".to_string(),
        website: None,
    }
}

// parser.rs
use crate::domain::status::classify;
use crate::domain::Project;
use crate::sheets::{SheetsError, ValueRange};
use tracing::debug;

// Accepted header spellings per column, compared trimmed and lowercase.
const TITLE: &[&str] = &["project", "title", "name"];
const SECTION: &[&str] = &["section", "segment"];
const STATUS: &[&str] = &["status"];
const COMPLETION: &[&str] = &["est. completion", "completion date", "completion"];
const LOCATION: &[&str] = &[
    "city/neighborhood",
    "city/boston neighborhood",
    "city or neighborhood",
    "location",
];
const OWNERS: &[&str] = &["owner(s)", "owners", "owner"];
const DESIGNER: &[&str] = &["designer"];
const CONSTRUCTOR: &[&str] = &["constructor"];
const CONSTRUCTION_START: &[&str] = &["est. construction start", "construction start"];
const CONTACTS: &[&str] = &["point(s) of contact", "contacts", "contact"];
const WEBSITE: &[&str] = &["website", "link", "url"];

struct Columns {
    title: usize,
    status: usize,
    section: Option<usize>,
    completion: Option<usize>,
    location: Option<usize>,
    owners: Option<usize>,
    designer: Option<usize>,
    constructor: Option<usize>,
    construction_start: Option<usize>,
    contacts: Option<usize>,
    website: Option<usize>,
}

impl Columns {
    fn locate(header: &[String]) -> Result<Self, SheetsError> {
        let find = |names: &[&str]| {
            header
                .iter()
                .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
        };

        Ok(Self {
            title: find(TITLE).ok_or(SheetsError::MissingColumn("Project"))?,
            status: find(STATUS).ok_or(SheetsError::MissingColumn("Status"))?,
            section: find(SECTION),
            completion: find(COMPLETION),
            location: find(LOCATION),
            owners: find(OWNERS),
            designer: find(DESIGNER),
            constructor: find(CONSTRUCTOR),
            construction_start: find(CONSTRUCTION_START),
            contacts: find(CONTACTS),
            website: find(WEBSITE),
        })
    }
}

/// Turn sheet rows into projects. The first row names the columns.
///
/// Rows without a title are skipped. A status outside the known set fails the
/// whole load, naming the 1-based sheet row.
pub fn parse_projects(range: &ValueRange) -> Result<Vec<Project>, SheetsError> {
    if range.values.is_empty() {
        return Err(SheetsError::Empty);
    }

    let header: Vec<String> = (0..range.values[0].len())
        .map(|col| range.cell(0, col))
        .collect();
    let cols = Columns::locate(&header)?;

    let mut projects = Vec::with_capacity(range.values.len() - 1);

    for row in 1..range.values.len() {
        let text = |col: Option<usize>| {
            col.map(|c| range.cell(row, c).trim().to_string())
                .unwrap_or_default()
        };

        let title = text(Some(cols.title));
        if title.is_empty() {
            debug!(row = row + 1, "Skipping row without a title");
            continue;
        }

        let raw_status = text(Some(cols.status));
        let status = classify(&raw_status).map_err(|e| SheetsError::UnknownStatus {
            row: row + 1,
            value: e.0,
        })?;

        projects.push(Project {
            title,
            section: non_empty(text(cols.section)),
            status,
            completion_date: text(cols.completion),
            city_or_neighborhood: text(cols.location),
            owners: split_owners(&text(cols.owners)),
            designer: text(cols.designer),
            constructor: text(cols.constructor),
            construction_start_date: text(cols.construction_start),
            contacts: text(cols.contacts),
            website: non_empty(text(cols.website)),
        });
    }

    Ok(projects)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Owners are listed one per line or separated by semicolons.
fn split_owners(cell: &str) -> Vec<String> {
    cell.split(|c| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

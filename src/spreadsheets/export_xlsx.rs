use crate::domain::{filter_and_sort, LocationFilter, Project};
use crate::errors::ServerError;
use crate::responses::{download_response, ResultResp, XLSX_CONTENT_TYPE};
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 12] = [
    "Project",
    "Section",
    "Status",
    "Progress",
    "Est. Completion",
    "City/Neighborhood",
    "Owner(s)",
    "Designer",
    "Constructor",
    "Est. Construction Start",
    "Point(s) of Contact",
    "Website",
];

/// Download the filtered, title-sorted project list as a workbook.
pub fn export_projects_xlsx(projects: &[Project], filter: &LocationFilter) -> ResultResp {
    let buffer = build_workbook(&filter_and_sort(projects, filter))?;
    download_response(buffer, XLSX_CONTENT_TYPE, &export_filename(filter))
}

fn build_workbook(projects: &[&Project]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, project) in projects.iter().enumerate() {
        let r = (i + 1) as u32;

        let text_cells = [
            (0, project.title.as_str()),
            (1, project.section.as_deref().unwrap_or("")),
            (2, project.status.as_str()),
            (4, project.completion_date.as_str()),
            (5, project.city_or_neighborhood.as_str()),
            (7, project.designer.as_str()),
            (8, project.constructor.as_str()),
            (9, project.construction_start_date.as_str()),
            (10, project.contacts.as_str()),
            (11, project.link().unwrap_or("")),
        ];
        for (col, value) in text_cells {
            worksheet.write_string(r, col, value).map_err(|e| {
                ServerError::XlsxError(format!("Failed to write {}: {}", HEADERS[col as usize], e))
            })?;
        }

        worksheet
            .write_string(r, 6, project.owners_display())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write owners: {}", e)))?;

        worksheet
            .write_number(r, 3, project.status.ordinal() as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write progress: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

/// `projects.xlsx`, or `projects_<location>.xlsx` with anything unsafe replaced by `_`.
pub fn export_filename(filter: &LocationFilter) -> String {
    match filter.query() {
        Some(location) => {
            let safe: String = location
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect();
            format!("projects_{safe}.xlsx")
        }
        None => "projects.xlsx".to_string(),
    }
}

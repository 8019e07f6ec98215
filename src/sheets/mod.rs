mod loader;
mod parser;
mod sheets_error;

pub use loader::{SheetLoader, ValueRange};
pub use parser::parse_projects;
pub use sheets_error::SheetsError;

use crate::config::SheetSource;
use crate::domain::Project;

/// Fetch the sheet and parse it into projects.
pub fn load_projects(
    loader: &SheetLoader,
    source: &SheetSource,
) -> Result<Vec<Project>, SheetsError> {
    let range = loader.load(source)?;
    parse_projects(&range)
}

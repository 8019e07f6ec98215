pub mod grouping;
pub mod location;
pub mod project;
pub mod status;

pub use grouping::{filter_and_sort, group_projects};
pub use location::{location_options, LocationFilter};
pub use project::Project;
pub use status::Status;

pub mod home;
pub mod sections;

pub use home::home_page;
pub use sections::{project_sections, EMPTY_SECTION};

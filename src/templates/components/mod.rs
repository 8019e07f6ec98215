pub mod error;
pub mod filter_form;
pub mod project_card;

pub use error::html_error_response;
pub use filter_form::filter_form;
pub use project_card::project_card;

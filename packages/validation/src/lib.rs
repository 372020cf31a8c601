pub mod combinators;
pub mod content;
pub mod error;
pub mod parsers;
pub mod predicates;
pub mod validator;

// Re-export common types and functions
pub use combinators::{when, Validate, When};
pub use content::{is_regular_string, is_regular_string_with};
pub use error::{Checked, Rejection, ValidationError};
pub use parsers::{parse_account_url, parse_bool, parse_checkbox, parse_input, parse_number};
pub use predicates::{is_checked, is_email, is_present, is_project_role, is_url, PROJECT_ROLES};
pub use validator::Validator;

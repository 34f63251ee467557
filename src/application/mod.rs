pub mod app_error;
pub mod tokens;
pub mod use_cases;
pub mod validators;
